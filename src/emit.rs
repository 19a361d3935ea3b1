//! The metadata emission stage.
//!
//! Runs once per build, after the host has finalized every output artifact:
//! resolve the output root, validate it, compose the destination, build and
//! serialize the payload, write the artifact. Nothing in this module
//! returns an error to the caller - the result is an [`EmitOutcome`], and a
//! failed emission is a logged diagnostic, never an aborted build.

use std::fs;
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::clock::Clock;
use crate::config::ConfigSnapshot;
use crate::error::EmitError;
use crate::location::OutputLocation;
use crate::metadata::{BuildMetadata, ARTIFACT_FILENAME};

/// Fixed tag prefixed to every diagnostic line this crate emits.
pub const LOG_TAG: &str = "build-info";

/// Terminal result of one emission attempt.
///
/// `Skipped` and `Failed` are equivalent from the host's point of view -
/// the build continues and no artifact exists - but they are logged at
/// different severities: validation skips are warnings, contained write
/// failures are errors.
#[derive(Debug)]
pub enum EmitOutcome {
    /// The artifact was written.
    Written {
        /// Absolute destination of the artifact.
        path: PathBuf,
    },
    /// Validation stopped the emission before any write was attempted.
    Skipped {
        /// Why the emission was skipped.
        reason: SkipReason,
    },
    /// The write was attempted and failed; the error was logged and
    /// swallowed.
    Failed {
        /// The contained failure.
        error: EmitError,
    },
}

impl EmitOutcome {
    /// True when the artifact exists on disk.
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, EmitOutcome::Written { .. })
    }
}

/// Why an emission was skipped before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The location descriptor did not resolve to a filesystem path.
    UnresolvableLocation,
    /// The resolved output directory does not exist.
    MissingDirectory,
}

/// Emit the build metadata artifact into the host's output root.
///
/// This is the completion-phase operation. It cannot fail and never
/// panics: every error path collapses into an [`EmitOutcome`] variant and
/// at most one diagnostic line. There is no retry; the next successful
/// build overwrites the artifact.
pub fn emit_build_info(
    snapshot: &ConfigSnapshot,
    location: &OutputLocation,
    clock: &dyn Clock,
) -> EmitOutcome {
    // The location comes from the host's own resolved output directory,
    // never from free-form user input.
    let Some(dir) = location.to_directory_path() else {
        warn!("[{LOG_TAG}] output location could not be resolved, skipping build metadata");
        return EmitOutcome::Skipped {
            reason: SkipReason::UnresolvableLocation,
        };
    };

    if !dir.is_dir() {
        warn!(
            "[{LOG_TAG}] output directory {} does not exist, skipping build metadata",
            dir.display()
        );
        return EmitOutcome::Skipped {
            reason: SkipReason::MissingDirectory,
        };
    }

    // Fixed filename joined to the validated directory: no traversal, no
    // runtime-derived names.
    let destination = dir.join(ARTIFACT_FILENAME);
    let payload = BuildMetadata::from_snapshot(snapshot, clock.now());

    let body = match payload.to_json_pretty() {
        Ok(body) => body,
        Err(error) => {
            error!("[{LOG_TAG}] {error}");
            return EmitOutcome::Failed { error };
        }
    };

    // One create-or-truncate call; the previous artifact is fully replaced,
    // never merged.
    match fs::write(&destination, body) {
        Ok(()) => {
            info!("[{LOG_TAG}] wrote {ARTIFACT_FILENAME} to the build output root");
            EmitOutcome::Written { path: destination }
        }
        Err(source) => {
            let error = EmitError::Write {
                path: destination,
                source,
            };
            error!("[{LOG_TAG}] {error}");
            EmitOutcome::Failed { error }
        }
    }
}
