//! Error kinds for a single insertion pass.
//!
//! Structural errors are expected and recovered internally (a missing heading
//! degrades to section creation); capability errors abort the insertion and
//! carry the path that failed so the caller can surface it.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong while computing or persisting one entry.
pub enum ClipError {
    /// The target heading is absent from the supplied index.
    ///
    /// Callers inside this crate recover by synthesizing the heading; it is
    /// only surfaced when `SectionLocator` is used directly.
    #[error("heading not found in document index")]
    HeadingNotFound,

    /// The storage capability could not read, create, or write the target.
    #[error("storage unavailable at {path}: {source}")]
    StorageUnavailable {
        /// Vault-relative path of the file or folder that failed.
        path: String,
        /// Underlying I/O failure from the storage backend.
        #[source]
        source: io::Error,
    },

    /// The configured date format does not produce a comparable value.
    #[error("date format {format:?} cannot be parsed back into a date")]
    AmbiguousDateComparison {
        /// The offending strftime format string.
        format: String,
    },

    /// A clip entry supplied as JSON could not be deserialized.
    #[error("invalid clip entry: {0}")]
    InvalidEntry(#[from] serde_json::Error),
}

impl ClipError {
    /// Wrap an I/O failure with the vault path it occurred on.
    pub fn storage(path: impl Into<String>, source: io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type ClipResult<T> = Result<T, ClipError>;
