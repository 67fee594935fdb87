//! Error handling and resolution statistics.
//!
//! This module provides:
//! - Error type definitions for fatal (run-aborting) failures
//! - Per-domain resolution failures, which never abort a run
//! - Resolution statistics grouped by failure kind
//!
//! Failures are split into:
//! - **Fatal**: configuration, input and validation errors, surfaced before any table output
//! - **Per-domain**: resolver errors and empty answers, rendered as placeholder rows

mod stats;
mod types;

// Re-export public API
pub use stats::ResolutionStats;
pub use types::{CheckError, FailureKind, InitializationError, ResolutionFailure};
