use std::path::PathBuf;
use thiserror::Error;

use crate::options::ConfigError;

/// Errors raised at the file boundary. Conversion itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing {}", path.display())]
    MissingInput { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
