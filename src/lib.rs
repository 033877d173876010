//! # maze_pathfinding
//!
//! Solves mazes drawn as images. Every pixel is a node of a 4-connected grid, white pixels
//! are open and black pixels are walls. The start is marked green and the end red, either
//! by coloring a region of the image or by passing coordinates.
//!
//! Solving runs in stages:
//! 1. [anchor] resolves the start and end and marks them on the image.
//! 2. [cleaner] snaps every other pixel to open or wall using a [color::ColorClassifier].
//! 3. [solver] runs a
//!    [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) for a
//!    shortest path, reporting its progress to a [snapshot::SearchObserver].
//! 4. [render] draws the path, or crosses on both anchors if none exists.
//!
//! [pipeline] ties the stages together for files on disk.
//!
//! ```
//! use grid_util::point::Point;
//! use maze_pathfinding::anchor::AnchorSource;
//! use maze_pathfinding::config::SolverConfig;
//! use maze_pathfinding::maze_grid::ascii_image;
//! use maze_pathfinding::pipeline::solve_image;
//! use maze_pathfinding::snapshot::NoSnapshots;
//!
//! let image = ascii_image(&["...E", ".##.", "S..."]);
//! let config = SolverConfig {
//!     start: AnchorSource::Fixed(Point::new(0, 2)),
//!     end: AnchorSource::Fixed(Point::new(3, 0)),
//!     ..SolverConfig::default()
//! };
//! let solution = solve_image(image, &config, &mut NoSnapshots).unwrap();
//! assert_eq!(solution.search.outcome.path().unwrap().len(), 6);
//! ```
pub mod anchor;
pub mod cleaner;
pub mod color;
pub mod config;
pub mod error;
pub mod maze_grid;
pub mod pipeline;
pub mod render;
pub mod snapshot;
pub mod solver;
pub mod word_search;

pub use error::{Anchor, MazeError, Result};
pub use maze_grid::MazeGrid;
pub use solver::{BfsSolver, SearchOutcome};
