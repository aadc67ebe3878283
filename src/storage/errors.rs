//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or saving a catalog snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A snapshot entry is keyed by a name other than its product's.
    #[error("Snapshot entry \"{key}\" holds product \"{name}\"")]
    NameMismatch {
        /// Catalog key of the entry.
        key: String,
        /// Name recorded in the product.
        name: String,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error came from the file system.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this error came from encoding or decoding.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}
