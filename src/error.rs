use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickfindError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Usage store '{path}' is corrupt: {source}")]
    UsageStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuickfindError>;
