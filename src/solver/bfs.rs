use super::{SearchOutcome, SearchResult};
use crate::color::{FRONTIER_COLOR, SOLUTION_COLOR};
use crate::config::SNAPSHOT_EVERY;
use crate::error::Result;
use crate::maze_grid::MazeGrid;
use crate::render::paint_path;
use crate::snapshot::SearchObserver;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use image::RgbImage;
use log::{info, warn};
use std::collections::VecDeque;

/// Mutable state of one search. Queued entries are whole paths, so the path to the end needs no
/// reconstruction at the price of memory proportional to the queued path lengths.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub frontier: VecDeque<Vec<Point>>,
    pub visited: BoolGrid,
    pub iterations: usize,
    /// Copy of the grid on which the frontier is drawn, never read by the search itself.
    pub canvas: RgbImage,
}

impl SearchState {
    pub fn new(grid: &MazeGrid, start: Point) -> SearchState {
        let mut frontier = VecDeque::new();
        frontier.push_back(vec![start]);
        SearchState {
            frontier,
            visited: BoolGrid::new(grid.width(), grid.height(), false),
            iterations: 0,
            canvas: grid.image.clone(),
        }
    }
    fn into_result(self, outcome: SearchOutcome) -> SearchResult {
        SearchResult {
            outcome,
            iterations: self.iterations,
            canvas: self.canvas,
        }
    }
}

/// Breadth-first search over the pixels of a [MazeGrid]. Neighbours are expanded left, down,
/// right, up, which decides between equally short paths.
#[derive(Clone, Debug)]
pub struct BfsSolver {
    /// Progress is logged every `progress_every` iterations, zero disables it.
    pub progress_every: usize,
}

impl Default for BfsSolver {
    fn default() -> BfsSolver {
        BfsSolver {
            progress_every: SNAPSHOT_EVERY,
        }
    }
}

impl BfsSolver {
    pub fn new(progress_every: usize) -> BfsSolver {
        BfsSolver { progress_every }
    }

    /// Finds a shortest 4-connected path from `start` to `end`. Running out of nodes is
    /// reported as [SearchOutcome::NoPath], only observer failures are errors.
    pub fn solve<O: SearchObserver>(
        &self,
        grid: &MazeGrid,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> Result<SearchResult> {
        info!("Solving...");
        let mut state = SearchState::new(grid, start);
        if !grid.point_in_bounds(start) {
            warn!("Start {} lies outside the maze", start);
            return Ok(state.into_result(SearchOutcome::NoPath));
        }
        while let Some(path) = state.frontier.pop_front() {
            let Some(&pos) = path.last() else {
                continue;
            };
            // A position can be queued several times before its first expansion, the first
            // dequeue carries a shortest path
            if state.visited.get_point(pos) {
                continue;
            }
            state.visited.set_point(pos, true);

            if pos == end {
                paint_path(&mut state.canvas, &path, SOLUTION_COLOR);
                observer.on_solution(&state.canvas)?;
                info!("Found a path after {} iterations.", state.iterations);
                return Ok(state.into_result(SearchOutcome::Found(path)));
            }

            for neighbour in grid.open_neighbours(pos) {
                if state.visited.get_point(neighbour) {
                    continue;
                }
                state.canvas.put_pixel(
                    neighbour.x as u32,
                    neighbour.y as u32,
                    FRONTIER_COLOR.into(),
                );
                let mut next = path.clone();
                next.push(neighbour);
                state.frontier.push_back(next);
            }
            observer.on_iteration(state.iterations, &state.canvas)?;
            if self.progress_every > 0
                && state.iterations > 0
                && state.iterations % self.progress_every == 0
            {
                info!(
                    "{} iterations, {} paths queued",
                    state.iterations,
                    state.frontier.len()
                );
            }
            state.iterations += 1;
        }
        info!("Returning after {} iterations.", state.iterations);
        Ok(state.into_result(SearchOutcome::NoPath))
    }
}
