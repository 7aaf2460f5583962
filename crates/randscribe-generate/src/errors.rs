use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while generating or writing random data.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a regular file: {0}")]
    NotARegularFile(PathBuf),
    #[error("output error: {0}")]
    Echo(#[source] std::io::Error),
    #[error("invalid letter string: {0}")]
    InvalidLetterString(String),
}

impl GenerationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerationError::Io {
            path: path.into(),
            source,
        }
    }
}
