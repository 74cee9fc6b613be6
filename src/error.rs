//! Errors raised while converting posts

use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to list {path:?}")]
    List {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to serialize {path:?}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Single-line report of a failed command, causes joined with `: `
pub fn report(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err).replace(['\r', '\n'], " ")
}
