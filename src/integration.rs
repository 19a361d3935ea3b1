//! The lifecycle integration surface.
//!
//! One [`BuildInfoIntegration`] value lives for the duration of one build.
//! The host drives it through exactly two hooks, in order: the
//! configuration hook captures the allow-listed fields, the completion hook
//! emits the artifact. The integration never calls the host back and holds
//! no state besides the two-field snapshot and its lifecycle position.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::{BuildConfig, ConfigSnapshot};
use crate::emit::{emit_build_info, EmitOutcome};
use crate::location::OutputLocation;

/// Where one build's metadata emission currently stands.
///
/// `Skipped`, `Written`, and `WriteFailed` are terminal; no state persists
/// across builds besides the artifact file itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Neither hook has run.
    Uninitialized,
    /// The configuration hook ran; the snapshot is held.
    ConfigCaptured,
    /// Terminal: validation skipped the emission.
    Skipped,
    /// Terminal: the artifact was written.
    Written,
    /// Terminal: the write failed and was contained.
    WriteFailed,
}

/// Build-lifecycle integration that writes `build-info.json`.
#[derive(Clone)]
pub struct BuildInfoIntegration {
    snapshot: ConfigSnapshot,
    state: LifecycleState,
    clock: Arc<dyn Clock>,
}

impl BuildInfoIntegration {
    /// Integration stamping artifacts with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Integration with a caller-supplied clock.
    ///
    /// Tests pin the timestamp this way to assert byte-identical artifacts.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot: ConfigSnapshot::empty(),
            state: LifecycleState::Uninitialized,
            clock,
        }
    }

    /// Configuration-phase hook.
    ///
    /// Invoked by the host once its configuration is resolved. Captures
    /// `output` and `site` into the held snapshot without validating
    /// either; it performs no I/O and cannot fail. Invoking it again
    /// replaces the snapshot.
    pub fn config_resolved(&mut self, config: &BuildConfig) {
        self.snapshot = ConfigSnapshot::capture(config);
        self.state = LifecycleState::ConfigCaptured;
    }

    /// Completion-phase hook.
    ///
    /// Invoked by the host after every output artifact is finalized on
    /// disk. Emits the artifact into the output root and reports what
    /// happened; it never fails and never panics. If the configuration
    /// hook never ran, the payload falls back to its defaulting policy.
    pub fn build_done(&mut self, location: &OutputLocation) -> EmitOutcome {
        let outcome = emit_build_info(&self.snapshot, location, self.clock.as_ref());
        self.state = match outcome {
            EmitOutcome::Written { .. } => LifecycleState::Written,
            EmitOutcome::Skipped { .. } => LifecycleState::Skipped,
            EmitOutcome::Failed { .. } => LifecycleState::WriteFailed,
        };
        outcome
    }

    /// Current lifecycle position.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The held snapshot (empty until the configuration hook runs).
    #[must_use]
    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }
}

impl Default for BuildInfoIntegration {
    fn default() -> Self {
        Self::new()
    }
}
