use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordScrambleError {
    #[error("Could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WordScrambleError>;

impl WordScrambleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
