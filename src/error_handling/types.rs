//! Error type definitions.
//!
//! This module defines the fatal error types that abort a run, the per-domain
//! resolution failures that do not, and the categories used to count them.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::domain::ValidationError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors that abort a run before any table is printed.
///
/// Each variant maps to its own process exit code so scripts can tell a bad
/// option from a bad input file.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The `--type` option is not one of the supported record types.
    #[error("Invalid DNS record type: {0}")]
    InvalidRecordType(String),

    /// The input path does not reference a regular file.
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A line of the input file is not a syntactically valid domain.
    #[error(transparent)]
    InvalidDomain(#[from] ValidationError),

    /// The input file exists but could not be read (permissions, invalid UTF-8).
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Shared resources could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

impl CheckError {
    /// Process exit code for this error.
    ///
    /// `2` is left to `clap` for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::InvalidRecordType(_) => 3,
            CheckError::FileNotFound(_) => 4,
            CheckError::InvalidDomain(_) => 5,
            CheckError::ReadInput { .. } | CheckError::Initialization(_) => 1,
        }
    }
}

/// A DNS lookup for a single domain that did not produce an answer.
///
/// Recovered locally: the domain is rendered as a placeholder row and the run
/// continues with the next domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The resolver gave up waiting for an answer.
    #[error("DNS lookup for {domain} timed out")]
    Timeout {
        /// Domain that was queried
        domain: String,
    },

    /// Any other resolver error (SERVFAIL, refused, network errors, ...).
    #[error("DNS lookup for {domain} failed: {message}")]
    Lookup {
        /// Domain that was queried
        domain: String,
        /// Resolver error message
        message: String,
    },
}

impl ResolutionFailure {
    /// Category of this failure for statistics.
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolutionFailure::Timeout { .. } => FailureKind::Timeout,
            ResolutionFailure::Lookup { .. } => FailureKind::LookupError,
        }
    }
}

/// Why a domain was rendered as a placeholder row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// The resolver answered, but with no records of the requested types
    NoRecords,
    /// The lookup timed out
    Timeout,
    /// The lookup failed for another reason
    LookupError,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    /// Short label used in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NoRecords => "no records",
            FailureKind::Timeout => "timed out",
            FailureKind::LookupError => "lookup error",
        }
    }
}
