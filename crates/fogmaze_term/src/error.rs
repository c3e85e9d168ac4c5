use std::io;
use std::path::PathBuf;

use fogmaze::config::ConfigError;
use fogmaze::leaderboard::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("failed to create data directory {path:?}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read settings {path:?}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings {path:?}: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid maze configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("input: {0}")]
    Input(#[from] tokio_util::codec::LinesCodecError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
