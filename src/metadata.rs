//! The build metadata payload and its artifact rendering.
//!
//! [`BuildMetadata`] is the entire contents of `build-info.json`: four flat
//! fields, constructed fresh on every emission and discarded after the
//! write attempt. Field declaration order is the serialization order, which
//! keeps the rendered artifact byte-stable for a fixed payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigSnapshot;
use crate::error::{EmitError, EmitResult};

/// Fixed identifier of the host ecosystem this artifact describes.
pub const FRAMEWORK: &str = "astro";

/// Fixed artifact filename, joined to the validated output directory.
///
/// The name is a compile-time constant: there is no runtime-derived
/// filename and therefore no path-injection surface.
pub const ARTIFACT_FILENAME: &str = "build-info.json";

/// Fallback recorded when the host declared no output mode.
pub const UNKNOWN_OUTPUT: &str = "unknown";

/// The flat, allow-listed payload written to `build-info.json`.
///
/// Every field is a compile-time constant, a value captured from the host's
/// own declared configuration, or a locally generated timestamp. Nothing
/// here may originate from environment variables, filesystem contents, or
/// network data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    /// Host ecosystem identifier; always [`FRAMEWORK`].
    pub framework: String,
    /// Declared output mode, or [`UNKNOWN_OUTPUT`] when absent.
    pub output: String,
    /// Canonical site URL, or an explicit `null` when the host declared none.
    pub site: Option<String>,
    /// Moment the artifact was produced, UTC.
    pub built_at: DateTime<Utc>,
}

impl BuildMetadata {
    /// Build the payload from the held snapshot.
    ///
    /// Applies the defaulting policy deferred from capture: a missing
    /// output mode becomes [`UNKNOWN_OUTPUT`], a missing site URL becomes
    /// an explicit `null`. Neither default is worth a diagnostic.
    #[must_use]
    pub fn from_snapshot(snapshot: &ConfigSnapshot, built_at: DateTime<Utc>) -> Self {
        Self {
            framework: FRAMEWORK.to_string(),
            output: snapshot
                .output()
                .map_or_else(|| UNKNOWN_OUTPUT.to_string(), |mode| mode.to_string()),
            site: snapshot.site().map(str::to_string),
            built_at,
        }
    }

    /// Render the artifact body: pretty JSON, 2-space indentation, key
    /// order fixed by this struct's field order.
    pub fn to_json_pretty(&self) -> EmitResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EmitError::Json {
            message: format!("serialize payload: {e}"),
        })
    }

    /// Parse an artifact produced by [`to_json_pretty`](Self::to_json_pretty).
    ///
    /// The JSON file is the one machine-readable contract this crate has;
    /// downstream tooling that consumes it can reuse this type.
    pub fn from_json(s: &str) -> EmitResult<Self> {
        serde_json::from_str(s).map_err(|e| EmitError::Json {
            message: format!("deserialize payload: {e}"),
        })
    }
}
