//! Optional game assets
//!
//! Every asset is optional. A missing or broken file is logged and the
//! feature it backs is simply switched off; the game stays playable.

pub mod artwork;

use log::{info, warn};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use artwork::Artwork;

pub const BACKGROUND_ART: &str = "background.txt";
pub const START_ART: &str = "start.txt";
pub const GAME_OVER_ART: &str = "gameover.txt";
pub const MUSIC_FILE: &str = "music.mp3";
pub const MOVE_SOUND: &str = "move.mp3";
pub const GAME_OVER_SOUND: &str = "gameover.mp3";

/// Failure to load an asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output: {0}")]
    Output(#[from] rodio::StreamError),

    #[error("cannot start playback: {0}")]
    Playback(#[from] rodio::PlayError),
}

/// Turn a load result into an optional asset, logging the failure
pub fn load_optional<T>(what: &str, result: Result<T, AssetError>) -> Option<T> {
    match result {
        Ok(asset) => {
            info!("Loaded {what}");
            Some(asset)
        }
        Err(e) => {
            warn!("Failed to load {what}: {e}");
            None
        }
    }
}

/// Text-art screens drawn by the renderer
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub background: Option<Artwork>,
    pub start: Option<Artwork>,
    pub game_over: Option<Artwork>,
}

impl Assets {
    /// Load all art from a directory, skipping whatever is missing
    pub fn load(dir: &Path) -> Self {
        Self {
            background: load_optional(
                "background art",
                Artwork::load(&dir.join(BACKGROUND_ART)),
            ),
            start: load_optional("start screen art", Artwork::load(&dir.join(START_ART))),
            game_over: load_optional(
                "game over art",
                Artwork::load(&dir.join(GAME_OVER_ART)),
            ),
        }
    }

    /// No art at all
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_degrades() {
        let dir = TempDir::new().unwrap();
        let assets = Assets::load(&dir.path().join("nope"));

        assert!(assets.background.is_none());
        assert!(assets.start.is_none());
        assert!(assets.game_over.is_none());
    }

    #[test]
    fn test_partial_assets() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(START_ART), "S N A K E\n").unwrap();

        let assets = Assets::load(dir.path());

        assert!(assets.start.is_some());
        assert!(assets.background.is_none());
        assert!(assets.game_over.is_none());
    }

    #[test]
    fn test_load_optional() {
        assert_eq!(load_optional("number", Ok::<_, AssetError>(3)), Some(3));

        let err = AssetError::Read {
            path: PathBuf::from("x.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(load_optional::<u8>("number", Err(err)), None);
    }

    #[test]
    fn test_error_message_names_file() {
        let err = AssetError::Read {
            path: PathBuf::from("assets/start.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read assets/start.txt: gone");
    }
}
