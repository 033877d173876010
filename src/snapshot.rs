use crate::error::Result;
use image::RgbImage;
use log::debug;
use std::path::PathBuf;

/// Receives the search canvas while a search runs. Errors abort the search.
pub trait SearchObserver {
    /// Called after the node of iteration `iteration` has been expanded.
    fn on_iteration(&mut self, iteration: usize, canvas: &RgbImage) -> Result<()>;
    /// Called once with the solution path drawn onto the canvas.
    fn on_solution(&mut self, canvas: &RgbImage) -> Result<()>;
}

/// Observer that ignores the search.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSnapshots;

impl SearchObserver for NoSnapshots {
    fn on_iteration(&mut self, _: usize, _: &RgbImage) -> Result<()> {
        Ok(())
    }
    fn on_solution(&mut self, _: &RgbImage) -> Result<()> {
        Ok(())
    }
}

/// Writes a frame every `every` iterations and a burst of `solution_frames` identical frames
/// once the solution is found, so an animation made from the frames lingers on the result.
#[derive(Clone, Debug)]
pub struct SnapshotRecorder {
    dir: PathBuf,
    every: usize,
    solution_frames: usize,
    ext: String,
    frames: usize,
}

impl SnapshotRecorder {
    pub fn new(dir: impl Into<PathBuf>, every: usize, solution_frames: usize, ext: &str) -> Self {
        SnapshotRecorder {
            dir: dir.into(),
            every,
            solution_frames,
            ext: ext.to_owned(),
            frames: 0,
        }
    }
    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{:05}.{}", index, self.ext))
    }
    fn write_frame(&mut self, canvas: &RgbImage) -> Result<()> {
        let path = self.frame_path(self.frames);
        debug!("Writing snapshot {}", path.display());
        canvas.save(&path)?;
        self.frames += 1;
        Ok(())
    }
}

impl SearchObserver for SnapshotRecorder {
    fn on_iteration(&mut self, iteration: usize, canvas: &RgbImage) -> Result<()> {
        if self.every > 0 && iteration % self.every == 0 {
            self.write_frame(canvas)?;
        }
        Ok(())
    }
    fn on_solution(&mut self, canvas: &RgbImage) -> Result<()> {
        for _ in 0..self.solution_frames {
            self.write_frame(canvas)?;
        }
        Ok(())
    }
}
