use crate::anchor::locate_anchors;
use crate::color::ColorClassifier;
use crate::cleaner::clean_image;
use crate::config::SolverConfig;
use crate::error::{MazeError, Result};
use crate::maze_grid::MazeGrid;
use crate::render::OutputRenderer;
use crate::snapshot::{SearchObserver, SnapshotRecorder};
use crate::solver::{BfsSolver, SearchOutcome, SearchResult};
use grid_util::point::Point;
use image::RgbImage;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension used for outputs of inputs without one.
const DEFAULT_EXT: &str = "png";

/// A maze ready to be searched.
#[derive(Clone, Debug)]
pub struct PreparedMaze {
    /// The input with both anchors marked, before cleaning.
    pub marked: RgbImage,
    pub grid: MazeGrid,
    pub start: Point,
    pub end: Point,
}

/// Locates and marks the anchors, then cleans the image into a [MazeGrid].
pub fn prepare(
    mut image: RgbImage,
    config: &SolverConfig,
    classifier: &mut ColorClassifier,
) -> Result<PreparedMaze> {
    let (start, end) = locate_anchors(&mut image, config.start, config.end, classifier)?;
    Ok(clean_marked(image, start, end, config, classifier))
}

/// Cleans an image whose anchors are already marked at `start` and `end`.
pub fn clean_marked(
    marked: RgbImage,
    start: Point,
    end: Point,
    config: &SolverConfig,
    classifier: &mut ColorClassifier,
) -> PreparedMaze {
    let mut grid = clean_image(marked.clone(), start, end, classifier);
    grid.brightness_threshold = config.brightness_threshold;
    PreparedMaze {
        marked,
        grid,
        start,
        end,
    }
}

/// A finished search and the image with the solution or the failure markers drawn on it.
#[derive(Clone, Debug)]
pub struct Solution {
    pub image: RgbImage,
    pub search: SearchResult,
    pub start: Point,
    pub end: Point,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        self.search.outcome.is_found()
    }
}

/// Searches a prepared maze and renders the outcome onto the cleaned grid.
pub fn solve_prepared<O: SearchObserver>(
    maze: PreparedMaze,
    config: &SolverConfig,
    observer: &mut O,
) -> Result<Solution> {
    let search = BfsSolver::new(config.snapshot_every).solve(
        &maze.grid,
        maze.start,
        maze.end,
        observer,
    )?;
    let renderer = OutputRenderer {
        cross_radius: config.cross_radius,
        ..OutputRenderer::default()
    };
    let mut image = maze.grid.image;
    match &search.outcome {
        SearchOutcome::Found(path) => renderer.render_solution(&mut image, path),
        SearchOutcome::NoPath => {
            error!("No path found.");
            renderer.render_failure(&mut image, maze.start, maze.end);
        }
    }
    Ok(Solution {
        image,
        search,
        start: maze.start,
        end: maze.end,
    })
}

/// In-memory version of [run] without any file output besides what `observer` does.
pub fn solve_image<O: SearchObserver>(
    image: RgbImage,
    config: &SolverConfig,
    observer: &mut O,
) -> Result<Solution> {
    let mut classifier = ColorClassifier::new();
    let maze = prepare(image, config, &mut classifier)?;
    solve_prepared(maze, config, observer)
}

/// Output location of `input`: the file name up to its first dot with the input's last
/// extension, inside `out_dir`. A leading dot belongs to the stem, so `.png` is a stem without
/// an extension.
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lead = usize::from(file_name.starts_with('.'));
    let body = &file_name[lead..];
    let (stem, ext) = match (body.split_once('.'), body.rsplit_once('.')) {
        (Some((stem, _)), Some((_, ext))) => (&file_name[..lead + stem.len()], ext),
        _ => (file_name.as_str(), DEFAULT_EXT),
    };
    out_dir.join(format!("{}.{}", stem, ext))
}

/// What a file run produced.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub outcome: SearchOutcome,
    pub iterations: usize,
    pub output: PathBuf,
    pub snapshots: usize,
}

/// Solves the maze image at `input`, writing debug images and snapshots to the temporary
/// directory and the result to the output directory.
pub fn run(config: &SolverConfig, input: &Path) -> Result<RunReport> {
    let mut image = image::open(input)?.to_rgb8();
    info!(
        "Loaded image '{}' ({}x{} = {} pixels).",
        input.display(),
        image.width(),
        image.height(),
        image.width() as u64 * image.height() as u64
    );
    fs::create_dir_all(&config.tmp_dir)?;
    fs::create_dir_all(&config.out_dir)?;

    let debug_path = |name: &str| config.tmp_dir.join(format!("{}.{}", name, config.snapshot_ext));
    let output = output_path(&config.out_dir, input);

    let mut classifier = ColorClassifier::new();
    let (start, end) = match locate_anchors(&mut image, config.start, config.end, &mut classifier)
    {
        Ok(anchors) => anchors,
        Err(e @ MazeError::AnchorNotFound { .. }) => {
            // Whatever was marked before the failure is kept for inspection
            image.save(debug_path("start_end"))?;
            image.save(&output)?;
            error!("{}, anchors saved as '{}'.", e, output.display());
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    let maze = clean_marked(image, start, end, config, &mut classifier);
    maze.marked.save(debug_path("start_end"))?;
    maze.grid.image.save(debug_path("clean"))?;

    let mut recorder = SnapshotRecorder::new(
        &config.tmp_dir,
        config.snapshot_every,
        config.solution_frames,
        &config.snapshot_ext,
    );
    let solution = solve_prepared(maze, config, &mut recorder)?;
    solution.image.save(&output)?;
    if solution.is_solved() {
        info!("Solution saved as '{}'.", output.display());
    } else {
        info!("Failure markers saved as '{}'.", output.display());
    }
    Ok(RunReport {
        outcome: solution.search.outcome,
        iterations: solution.search.iterations,
        output,
        snapshots: recorder.frames(),
    })
}
