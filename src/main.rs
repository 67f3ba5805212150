//! Tile Arena entry point
//!
//! Headless native driver: loads settings and the map, then runs the frame
//! loop without a window.

use std::path::PathBuf;

use clap::Parser;
use tile_arena::{App, Error, Settings};

/// Frames run when neither the settings nor the command line set a limit
const HEADLESS_FRAME_LIMIT: u64 = 600;

#[derive(Debug, Parser)]
#[command(name = "tile-arena")]
#[command(about = "Decode a tile map and run its physics headless")]
struct Args {
    /// Settings JSON file (defaults are used when omitted)
    settings: Option<PathBuf>,
    /// Map image overriding the one named in the settings
    map: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,
}

impl Args {
    fn into_settings(self) -> Result<Settings, Error> {
        let mut settings = Settings::load_or_default(self.settings.as_deref())?;
        if let Some(map) = self.map {
            settings.map_path = map;
        }
        // Nothing can send a quit event without a window
        settings.max_frames = self
            .max_frames
            .or(settings.max_frames)
            .or(Some(HEADLESS_FRAME_LIMIT));
        Ok(settings)
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    log::info!("Tile Arena (native) starting...");

    let settings = Args::parse().into_settings()?;
    let mut app = App::new(settings)?;
    let mut vertices = 0usize;
    app.run(|_| Vec::new(), |list| vertices = list.vertex_count());

    for (i, entity) in app.arena.entities.iter().enumerate() {
        log::info!(
            "{} #{} at ({:.2}, {:.2}) vel ({:.2}, {:.2})",
            entity.kind.name(),
            i,
            entity.pos.x,
            entity.pos.y,
            entity.vel.x,
            entity.vel.y
        );
    }
    log::info!("Last frame submitted {} vertices", vertices);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths_and_frame_flag() {
        let args =
            Args::try_parse_from(["tile-arena", "cfg.json", "maps/dust.png", "--max-frames", "5"])
                .unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.map, Some(PathBuf::from("maps/dust.png")));
        assert_eq!(args.max_frames, Some(5));
    }

    #[test]
    fn test_headless_default_frame_limit() {
        let settings = Args::try_parse_from(["tile-arena"]).unwrap().into_settings().unwrap();
        assert_eq!(settings.max_frames, Some(HEADLESS_FRAME_LIMIT));

        let settings = Args::try_parse_from(["tile-arena", "--max-frames", "0"])
            .unwrap()
            .into_settings()
            .unwrap();
        assert_eq!(settings.max_frames, Some(0));
    }

    #[test]
    fn test_rejects_bad_frame_count() {
        assert!(Args::try_parse_from(["tile-arena", "--max-frames", "many"]).is_err());
    }
}
