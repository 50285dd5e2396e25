//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output directory is missing and could not be created
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An artifact could not be written to disk
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The OS random source could not seed the generator
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub(crate) fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::CreateDir {
        path: path.into(),
        source,
    }
}

pub(crate) fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Write {
        path: path.into(),
        source,
    }
}
