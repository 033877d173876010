use grid_util::point::Point;
use image::RgbImage;
use itertools::Itertools;

pub mod bfs;

pub use bfs::{BfsSolver, SearchState};

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path, starting at the start and ending at the end.
    Found(Vec<Point>),
    /// The frontier emptied without reaching the end.
    NoPath,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Outcome of a search together with the iteration count and the final search canvas.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub iterations: usize,
    pub canvas: RgbImage,
}

/// Checks that consecutive points of the path differ by one step along a single axis.
pub fn is_four_connected(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}
