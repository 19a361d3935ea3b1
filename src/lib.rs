//! # Buildstamp - Build Metadata Artifacts for Static-Site Pipelines
//!
//! Buildstamp plugs into a static-site generator's build lifecycle and, once
//! building finishes, deposits a single deterministic `build-info.json`
//! artifact at the root of the build output. The artifact answers "what was
//! built and when" - output mode, canonical site URL, build timestamp - and
//! nothing else. There is no runtime component: the integration only ever
//! executes inside the host's own build process.
//!
//! ## Core Concepts
//!
//! - **BuildConfig**: read-only boundary view of the host's resolved configuration
//! - **ConfigSnapshot**: the two captured fields held between the configuration
//!   and completion phases of one build
//! - **BuildMetadata**: the flat, allow-listed payload written to the artifact
//! - **EmitOutcome**: the contained result of one emission attempt - a failed
//!   write is a logged diagnostic, never an aborted build
//!
//! ## Usage
//!
//! ```rust,ignore
//! use buildstamp::{BuildConfig, BuildInfoIntegration, OutputLocation, OutputMode};
//!
//! let mut integration = BuildInfoIntegration::new();
//!
//! // Configuration phase: the host exposes its resolved configuration.
//! integration.config_resolved(&BuildConfig {
//!     output: Some(OutputMode::Static),
//!     site: Some("https://example.com".to_string()),
//! });
//!
//! // Completion phase: every output artifact is finalized on disk.
//! let outcome = integration.build_done(&OutputLocation::from_dir("/site/dist"));
//! assert!(outcome.is_written());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod emit;
pub mod error;
pub mod integration;
pub mod location;
pub mod metadata;

// Re-export primary types at crate root for convenience
pub use clock::{Clock, SystemClock};
pub use config::{BuildConfig, ConfigSnapshot, OutputMode, ParseOutputModeError};
pub use emit::{emit_build_info, EmitOutcome, SkipReason, LOG_TAG};
pub use error::{EmitError, EmitResult};
pub use integration::{BuildInfoIntegration, LifecycleState};
pub use location::OutputLocation;
pub use metadata::{BuildMetadata, ARTIFACT_FILENAME, FRAMEWORK, UNKNOWN_OUTPUT};
