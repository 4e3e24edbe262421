#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use rotatile_core::{ConfigError, GridError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid board: {0}")]
    Grid(#[from] GridError),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

impl HarnessError {
    /// Process exit code: 2 for bad input, 1 for I/O failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Grid(_) | Self::Config(_) | Self::Toml(_) | Self::Usage(_) => 2,
            Self::ReadFile { .. } | Self::Json(_) | Self::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
