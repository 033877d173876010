use core::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, MazeError>;

/// The two distinguished positions of a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Anchor::Start => write!(f, "START"),
            Anchor::End => write!(f, "END"),
        }
    }
}

/// Fatal failures of a solver run. An exhausted search is not one of them, see
/// [SearchOutcome](crate::solver::SearchOutcome).
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// Detection found no pixel of the anchor color and no fallback was given.
    #[error("failed to find {anchor} point in maze")]
    AnchorNotFound { anchor: Anchor },

    /// Decoding the input or encoding an output image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Preparing an output directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
