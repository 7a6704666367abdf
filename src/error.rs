// Error types for temblor.
// Covers feed transport and parse failures, cache corruption, and query errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemblorError {
    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed response is not a valid snapshot: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("cache file {path} is corrupt: {source}")]
    CacheCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no event found matching id {0}")]
    EventNotFound(String),

    #[error("invalid location pattern: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TemblorError>;
