use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::game::GameConfig;

/// Everything needed to run a terminal session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulation settings
    pub game: GameConfig,
    /// Directory holding art and sound files
    pub asset_dir: PathBuf,
    /// Skip opening the audio device
    pub muted: bool,
    /// Where log output goes; the terminal itself is taken by the game
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            asset_dir: PathBuf::from("assets"),
            muted: false,
            log_file: PathBuf::from("tui_snake.log"),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}
