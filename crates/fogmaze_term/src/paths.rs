//! Cross-platform application paths

use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, AppError> {
        let base = dirs::data_dir().ok_or(AppError::NoDataDir)?;
        Self::at(base.join("fogmaze"))
    }

    /// Use `data_dir` instead of the OS location.
    pub fn at(data_dir: PathBuf) -> Result<Self, AppError> {
        fs::create_dir_all(&data_dir).map_err(|source| AppError::DataDir {
            path: data_dir.clone(),
            source,
        })?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    pub fn leaderboard_file(&self) -> PathBuf {
        self.data_dir.join("leaderboard.json")
    }
}
