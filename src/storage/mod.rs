//! Persistent storage
//!
//! Local application settings. Everything else lives on the backend.

pub mod settings;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Application data directory, e.g. `~/.local/share/babbagebox` on Linux
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("com", "BabbageBox", "BabbageBox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
