//! Error types for buildstamp.
//!
//! All errors are strongly typed using thiserror. None of them ever cross
//! the integration boundary: the emission stage converts every failure into
//! an [`EmitOutcome`](crate::emit::EmitOutcome) variant, so metadata
//! generation can never abort or alter the host build.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing the build metadata artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The payload could not be rendered to, or parsed from, JSON.
    #[error("Build metadata JSON error: {message}")]
    Json {
        /// Underlying serializer message.
        message: String,
    },

    /// The artifact file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination the write was attempted against.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for fallible emission internals.
pub type EmitResult<T> = Result<T, EmitError>;
