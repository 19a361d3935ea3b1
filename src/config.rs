//! Host configuration boundary and the held snapshot.
//!
//! The host build system resolves its configuration long before any output
//! exists on disk, and that data is gone by the time the completion hook
//! runs. The two fields this crate cares about are therefore read during
//! the configuration phase and held in a [`ConfigSnapshot`] until emission.
//!
//! Capture performs no validation and no defaulting. Defaulting policy
//! (missing output mode, missing site URL) belongs to the emission stage,
//! where the payload is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The build output strategy declared by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Fully prerendered output.
    Static,
    /// Prerendered pages with selectively server-rendered routes.
    Hybrid,
    /// Server-rendered output.
    Server,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputMode::Static => "static",
            OutputMode::Hybrid => "hybrid",
            OutputMode::Server => "server",
        };
        f.write_str(s)
    }
}

/// Error returned when parsing an unrecognized output mode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown output mode: {0}")]
pub struct ParseOutputModeError(pub String);

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(OutputMode::Static),
            "hybrid" => Ok(OutputMode::Hybrid),
            "server" => Ok(OutputMode::Server),
            other => Err(ParseOutputModeError(other.to_string())),
        }
    }
}

/// Read-only view of the host's resolved configuration at the boundary.
///
/// The host exposes this during its configuration phase. The capture
/// operation reads from it and must never mutate it; taking it by shared
/// reference encodes that contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Declared output strategy, if any.
    pub output: Option<OutputMode>,
    /// Canonical site URL, if configured.
    pub site: Option<String>,
}

/// The two configuration fields held between the configuration and
/// completion phases of one build.
///
/// Lifecycle: created empty at process start, populated by capture, read by
/// the emission stage, never mutated afterward. One writer, one reader, in
/// the strict temporal order the host guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    output: Option<OutputMode>,
    site: Option<String>,
}

impl ConfigSnapshot {
    /// An empty snapshot: nothing captured yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the allow-listed fields from the host configuration.
    ///
    /// Reads `output` and `site`, nothing else, and cannot fail. Absent
    /// fields stay absent; defaulting happens at emission. Capturing again
    /// replaces the previous snapshot (later values win).
    #[must_use]
    pub fn capture(config: &BuildConfig) -> Self {
        Self {
            output: config.output,
            site: config.site.clone(),
        }
    }

    /// The captured output mode, if the host declared one.
    #[must_use]
    pub fn output(&self) -> Option<OutputMode> {
        self.output
    }

    /// The captured site URL, if the host declared one.
    #[must_use]
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }
}
