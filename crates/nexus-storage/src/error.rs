//! Error types for nexus-storage
//!
//! Storage failures are rare in practice (a local file in the user's data
//! directory), but every I/O step still reports which file it touched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing a document file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing the document file
    #[error("Storage I/O failed for {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document file exists but is not a JSON object
    #[error("Failed to parse storage file {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A stored value does not have the expected shape
    #[error("Stored value for key '{key}' is invalid: {message}")]
    Decode {
        /// Key being read
        key: String,
        /// Deserializer message
        message: String,
    },

    /// A value could not be serialized to JSON
    #[error("Failed to serialize value for key '{key}': {message}")]
    Serialize {
        /// Key being written
        key: String,
        /// Serializer message
        message: String,
    },

    /// The final rename of an atomic write failed
    #[error("Failed to write storage atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Path to the storage file
        path: PathBuf,
        /// Path to the temporary safety copy
        temp_path: PathBuf,
    },
}

/// Result type alias using [`StorageError`]
pub type Result<T> = std::result::Result<T, StorageError>;
