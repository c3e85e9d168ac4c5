//! `config.json` in the data directory. Every key is optional.

use std::fs;
use std::io;
use std::path::Path;

use fogmaze::config::MazeConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

fn default_target_fps() -> u32 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
    /// Fixed maze seed; a fresh one is drawn per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            target_fps: default_target_fps(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Read `path`, falling back to defaults when it does not exist.
    /// Returns whether the file was found.
    pub fn load(path: &Path) -> Result<(Self, bool), AppError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok((Self::default(), false)),
            Err(source) => {
                return Err(AppError::ReadSettings {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let mut cfg: AppConfig =
            serde_json::from_str(&text).map_err(|source| AppError::ParseSettings {
                path: path.to_path_buf(),
                source,
            })?;
        cfg.target_fps = cfg.target_fps.clamp(1, 240);
        Ok((cfg, true))
    }

    pub fn frame_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis((1000 / self.target_fps.clamp(1, 240)).max(1) as u64)
    }
}
