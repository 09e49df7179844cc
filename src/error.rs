use std::path::PathBuf;
use thiserror::Error;

/// Rejected jump-to input. The view state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIndex {
    #[error("'{0}' is not a slide number")]
    NotANumber(String),

    #[error("slide {value} is out of range (1..={len})")]
    OutOfRange { value: i64, len: usize },
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    Empty,

    #[error("no image files found in directory: {0}")]
    NoImages(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum StringsError {
    #[error("failed to read string table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid string table: {0}")]
    Parse(#[from] serde_json::Error),
}
