//! Error type shared by every engine operation

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate
pub type Result<T, E = JottoError> = std::result::Result<T, E>;

/// Failures surfaced at the engine boundary
///
/// The core never prints or exits; every failure ends up here.
#[derive(Debug, thiserror::Error)]
pub enum JottoError {
    /// A file could not be opened, read or written
    #[error("cannot access {}: {source}", path.display())]
    BadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Content does not conform to the expected format
    #[error("bad format: {0}")]
    BadFormat(String),

    /// A word list produced no usable five-letter words
    #[error("word list contains no five-letter words")]
    EmptyDictionary,

    /// A match count outside `0..=5` was submitted
    #[error("match count must be between 0 and 5, got {0}")]
    OutOfRange(i64),

    /// A malformed or unknown word was supplied
    #[error("unknown or malformed word: {0:?}")]
    BadWord(String),

    /// A runtime operation was invoked before a tree was loaded
    #[error("no decision tree has been loaded")]
    NotInitialized,
}

impl JottoError {
    pub(crate) fn bad_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::BadFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn bad_format(reason: impl Into<String>) -> Self {
        Self::BadFormat(reason.into())
    }

    /// True for content errors, including an empty word list
    #[must_use]
    pub const fn is_bad_format(&self) -> bool {
        matches!(self, Self::BadFormat(_) | Self::EmptyDictionary)
    }
}
