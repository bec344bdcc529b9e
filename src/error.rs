//! Error types for pyspell.
//!
//! Lookup misses (an unknown first character, an empty distance bucket, an
//! input that does not look like pinyin) are not errors; they surface as empty
//! results. Only vocabulary loading and explicit vocabulary growth can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or growing a [`PinyinChecker`](crate::PinyinChecker).
#[derive(Error, Debug)]
pub enum Error {
    /// The vocabulary file does not exist.
    #[error("vocabulary file not found: {}", .0.display())]
    MissingResource(PathBuf),

    /// An absent item (an empty word) was offered for insertion.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The vocabulary source exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an [`Error::InvalidInput`].
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
