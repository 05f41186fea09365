//! Errors raised by the collaborators around the core (payload and template loading)

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid template store: {0}")]
    InvalidTemplates(String),
}

pub type Result<T> = std::result::Result<T, Error>;
