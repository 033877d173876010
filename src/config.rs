use crate::anchor::AnchorSource;
use std::path::PathBuf;

/// Save an image of the search every `SNAPSHOT_EVERY` iterations.
pub const SNAPSHOT_EVERY: usize = 20000;
/// Number of identical frames written once the solution is drawn.
pub const SOLUTION_FRAMES: usize = 10;
pub const BRIGHTNESS_THRESHOLD: u8 = 240;
/// Half the arm length of the cross drawn on the anchors when no path exists.
pub const CROSS_RADIUS: i32 = 10;
pub const OUT_DIR: &str = "out";
pub const TMP_DIR: &str = "tmp";
pub const SNAPSHOT_EXT: &str = "jpg";

/// Settings of a single solver run.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    pub out_dir: PathBuf,
    /// Receives the debug images and the search snapshots.
    pub tmp_dir: PathBuf,
    /// A value of zero disables periodic snapshots, the solution frames are still written.
    pub snapshot_every: usize,
    pub solution_frames: usize,
    pub snapshot_ext: String,
    pub start: AnchorSource,
    pub end: AnchorSource,
    pub cross_radius: i32,
    pub brightness_threshold: u8,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            out_dir: PathBuf::from(OUT_DIR),
            tmp_dir: PathBuf::from(TMP_DIR),
            snapshot_every: SNAPSHOT_EVERY,
            solution_frames: SOLUTION_FRAMES,
            snapshot_ext: SNAPSHOT_EXT.to_owned(),
            start: AnchorSource::Detect,
            end: AnchorSource::Detect,
            cross_radius: CROSS_RADIUS,
            brightness_threshold: BRIGHTNESS_THRESHOLD,
        }
    }
}
