//! Interactive cursor drawing demo
//!
//! Left click selects a cursor and drags it, the wheel zooms it, `R` and `E`
//! rotate it, `Delete` removes it and `D` shows the selection areas.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cursorkit::app::{LogConfig, WindowConfig};
use cursorkit::driver::{Driver, build_app};
use cursorkit::interaction::ZoomAnchor;
use cursorkit::motion::MotionKind;
use cursorkit::scene::Scene;

#[derive(Parser, Debug)]
#[command(name = "cursorkit")]
#[command(about = "Draw and animate cursors on an SDL2 window", long_about = None)]
#[command(version)]
struct Cli {
    /// Animation: spiral, bounce, spin or static (defaults to the scene's, then spiral)
    #[arg(short, long)]
    motion: Option<MotionKind>,

    /// JSON scene file (defaults to the built-in six shapes)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Outline the selection area of every cursor
    #[arg(long)]
    debug_selection: bool,

    /// Zoom without moving the cursor
    #[arg(long)]
    zoom_in_place: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<log::LevelFilter>,

    /// Also write the logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show the per frame rasterizer logs
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, default_value = "800")]
    width: u32,

    #[arg(long, default_value = "600")]
    height: u32,

    /// Delay between frames in milliseconds, overrides the motion's delay
    #[arg(long)]
    frame_delay_ms: Option<u64>,

    /// Sync presents with the display refresh
    #[arg(long)]
    vsync: bool,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let mut config = match self.log_level {
            Some(level) => LogConfig::new(level),
            None => LogConfig::default(),
        }
        .verbose(self.verbose);

        if let Some(path) = &self.log_file {
            config = config.to_file(path);
        }

        config
    }

    /// Motion from `--motion`, then the scene, then spiral. The frame delay
    /// is `--frame-delay-ms` or the motion's own
    fn resolve(&self, scene: &Scene) -> (MotionKind, Duration) {
        let motion = self.motion.or(scene.motion).unwrap_or_default();
        let frame_delay = self
            .frame_delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| motion.frame_delay());
        (motion, frame_delay)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scene = match &cli.scene {
        Some(path) => Scene::load(path).context("Failed to load the scene")?,
        None => Scene::default(),
    };

    let (motion, frame_delay) = cli.resolve(&scene);

    let anchor = if cli.zoom_in_place {
        ZoomAnchor::InPlace
    } else {
        ZoomAnchor::Origin
    };

    let window = WindowConfig::default()
        .title(&format!("CursorKit - {motion}"))
        .size(cli.width, cli.height)
        .vsync(cli.vsync)
        .frame_delay(frame_delay);

    let driver = Driver::new(&scene, motion, anchor).with_selection_overlay(cli.debug_selection);

    build_app(driver, window)
        .with_logs(cli.log_config())
        .run()
        .map_err(cursorkit::Error::Backend)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cursorkit").chain(args.iter().copied())).unwrap()
    }

    fn scene(motion: Option<MotionKind>) -> Scene {
        Scene {
            motion,
            ..Scene::default()
        }
    }

    #[test]
    fn test_motion_precedence() {
        let bounce = scene(Some(MotionKind::Bounce));

        assert_eq!(cli(&["--motion", "spin"]).resolve(&bounce).0, MotionKind::Spin);
        assert_eq!(cli(&[]).resolve(&bounce).0, MotionKind::Bounce);
        assert_eq!(cli(&[]).resolve(&scene(None)).0, MotionKind::Spiral);
    }

    #[test]
    fn test_frame_delay() {
        let (motion, delay) = cli(&["-m", "bounce"]).resolve(&scene(None));
        assert_eq!(delay, motion.frame_delay());
        assert_eq!(delay, Duration::from_millis(100));

        let (_, delay) = cli(&["-m", "bounce", "--frame-delay-ms", "16"]).resolve(&scene(None));
        assert_eq!(delay, Duration::from_millis(16));
    }

    #[test]
    fn test_flags() {
        let args = cli(&["--verbose", "--vsync", "--log-level", "trace"]);
        assert!(args.verbose && args.vsync);
        assert_eq!(args.log_level, Some(log::LevelFilter::Trace));

        assert!(Cli::try_parse_from(["cursorkit", "--motion", "zigzag"]).is_err());
    }
}
