use anyhow::Context;
use clap::Parser;
use grid_util::point::Point;
use log::error;
use maze_pathfinding::anchor::AnchorSource;
use maze_pathfinding::config::{self, SolverConfig};
use maze_pathfinding::pipeline::{run, RunReport};
use maze_pathfinding::SearchOutcome;
use std::path::PathBuf;
use std::process::ExitCode;

/// Draws the shortest path between the green start and the red end of a maze image.
#[derive(Parser, Debug)]
#[command(name = "maze_solve", version)]
struct Cli {
    /// Maze image to solve
    input: PathBuf,

    /// Fixed start coordinate as X,Y, skips detection of the green region
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Fixed end coordinate as X,Y, skips detection of the red region
    #[arg(long, value_parser = parse_point)]
    end: Option<Point>,

    /// Start coordinate used when no green region is found
    #[arg(long, value_parser = parse_point, conflicts_with = "start")]
    start_fallback: Option<Point>,

    /// End coordinate used when no red region is found
    #[arg(long, value_parser = parse_point, conflicts_with = "end")]
    end_fallback: Option<Point>,

    /// Directory of the solved image
    #[arg(long, default_value = config::OUT_DIR)]
    out_dir: PathBuf,

    /// Directory of debug images and search snapshots
    #[arg(long, default_value = config::TMP_DIR)]
    tmp_dir: PathBuf,

    /// Iterations between search snapshots, 0 disables them
    #[arg(long, default_value_t = config::SNAPSHOT_EVERY)]
    snapshot_every: usize,

    /// Number of frames written once a solution is found
    #[arg(long, default_value_t = config::SOLUTION_FRAMES)]
    solution_frames: usize,

    /// Image format extension of debug images and snapshots
    #[arg(long, default_value = config::SNAPSHOT_EXT)]
    snapshot_format: String,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn anchor_source(fixed: Option<Point>, fallback: Option<Point>) -> AnchorSource {
    match (fixed, fallback) {
        (Some(point), _) => AnchorSource::Fixed(point),
        (None, Some(point)) => AnchorSource::DetectOr(point),
        (None, None) => AnchorSource::Detect,
    }
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            out_dir: self.out_dir.clone(),
            tmp_dir: self.tmp_dir.clone(),
            snapshot_every: self.snapshot_every,
            solution_frames: self.solution_frames,
            snapshot_ext: self.snapshot_format.clone(),
            start: anchor_source(self.start, self.start_fallback),
            end: anchor_source(self.end, self.end_fallback),
            ..SolverConfig::default()
        }
    }
}

/// Process status of a run: 0 when solved, 1 when no path exists and 2 on errors.
fn exit_status<E>(report: &Result<RunReport, E>) -> u8 {
    match report {
        Ok(report) => match report.outcome {
            SearchOutcome::Found(_) => 0,
            SearchOutcome::NoPath => 1,
        },
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let report = run(&cli.config(), &cli.input)
        .with_context(|| format!("failed to solve '{}'", cli.input.display()));
    if let Err(e) = &report {
        error!("{:#}", e);
    }
    ExitCode::from(exit_status(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_pathfinding::{Anchor, MazeError};

    #[test]
    fn points_parse() {
        assert_eq!(parse_point("385,985"), Ok(Point::new(385, 985)));
        assert_eq!(parse_point(" 3, 4"), Ok(Point::new(3, 4)));
        assert!(parse_point("3;4").is_err());
        assert!(parse_point("a,4").is_err());
    }

    #[test]
    fn fixed_overrides_detection() {
        let cli = Cli::parse_from([
            "maze_solve",
            "maze.png",
            "--start",
            "1,2",
            "--end-fallback",
            "5,6",
        ]);
        let config = cli.config();
        assert_eq!(config.start, AnchorSource::Fixed(Point::new(1, 2)));
        assert_eq!(config.end, AnchorSource::DetectOr(Point::new(5, 6)));
        let conflicting = ["maze_solve", "m.png", "--start", "1,2", "--start-fallback", "1,2"];
        assert!(Cli::try_parse_from(conflicting).is_err());
    }

    #[test]
    fn outcomes_map_to_exit_status() {
        let report = |outcome| RunReport {
            outcome,
            iterations: 3,
            output: PathBuf::from("out/maze.png"),
            snapshots: 0,
        };
        let solved = report(SearchOutcome::Found(vec![Point::new(0, 0), Point::new(1, 0)]));
        assert_eq!(exit_status::<anyhow::Error>(&Ok(solved)), 0);
        assert_eq!(exit_status::<anyhow::Error>(&Ok(report(SearchOutcome::NoPath))), 1);
        let failed: Result<RunReport, _> = Err(MazeError::AnchorNotFound {
            anchor: Anchor::End,
        });
        assert_eq!(exit_status(&failed), 2);
    }
}
