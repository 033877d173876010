use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use image::RgbImage;
use maze_pathfinding::color::{OPEN_COLOR, WALL_COLOR};
use maze_pathfinding::maze_grid::MazeGrid;
use maze_pathfinding::snapshot::NoSnapshots;
use maze_pathfinding::solver::BfsSolver;
use std::hint::black_box;

/// A maze of horizontal corridors joined alternately at the right and left end, so the only
/// path from the top left to the bottom left visits every corridor.
fn serpentine(size: u32) -> MazeGrid {
    let mut image = RgbImage::from_pixel(size, size, OPEN_COLOR.into());
    for (i, y) in (1..size).step_by(2).enumerate() {
        let gap = if i % 2 == 0 { size - 1 } else { 0 };
        for x in (0..size).filter(|x| *x != gap) {
            image.put_pixel(x, y, WALL_COLOR.into());
        }
    }
    MazeGrid::new(image)
}

fn bfs_bench(c: &mut Criterion) {
    let solver = BfsSolver::new(0);
    for size in [33, 65, 129] {
        let serpentine = serpentine(size);
        let open = MazeGrid::new(RgbImage::from_pixel(size, size, OPEN_COLOR.into()));
        let start = Point::new(0, 0);
        let end = Point::new(0, size as i32 - 1);
        for (name, grid) in [("serpentine", &serpentine), ("open", &open)] {
            c.bench_function(format!("{name} {size}x{size}").as_str(), |b| {
                b.iter(|| black_box(solver.solve(grid, start, end, &mut NoSnapshots)))
            });
        }
    }
}

criterion_group!(benches, bfs_bench);
criterion_main!(benches);
