//! Error types for manifest baking.
//!
//! Every failure is fatal: the bake aborts before the output file is touched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while baking a manifest.
#[derive(Debug, Error)]
pub enum BakeError {
    /// The required package descriptor is missing.
    #[error("descriptor not found: {}", .path.display())]
    DescriptorNotFound {
        /// Path where the descriptor was expected.
        path: PathBuf,
    },

    /// The descriptor exists but is not valid JSON or lacks a required field.
    #[error("malformed descriptor {}: {reason}", .path.display())]
    MalformedDescriptor {
        /// Path of the offending descriptor.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The optional configuration file could not be parsed or failed validation.
    #[error("invalid configuration {}: {reason}", .path.display())]
    InvalidConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be read during traversal.
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The manifest could not be serialized or read back.
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BakeError {
    /// Wraps an I/O error with the path it occurred on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, BakeError>;
