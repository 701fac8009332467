//! Error types for prereqs operations.
//!
//! This module defines [`PrereqError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The eligibility core (normalizer, parser, evaluator, formatter) is total
//!   and never returns errors; only strict parsing opts into one
//! - Use `PrereqError` for catalog, configuration, and lookup failures
//! - Use `anyhow::Error` (via `PrereqError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prereqs operations.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Course catalog file does not exist.
    #[error("Course catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Course catalog could not be decoded.
    #[error("Failed to parse course catalog from {source_name}: {message}")]
    CatalogParseError {
        source_name: String,
        message: String,
    },

    /// Remote catalog could not be downloaded.
    #[error("Failed to fetch course catalog from {url}: {message}")]
    CatalogFetchError { url: String, message: String },

    /// Requested course is not in the catalog.
    #[error("Unknown course: {code}")]
    UnknownCourse { code: String },

    /// Strict mode: non-empty requisite text yielded no requirement groups.
    #[error("Could not parse prerequisites for {course}: {text:?}")]
    UnparsedRequisites { course: String, text: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrereqError {
    /// Process exit code for this error.
    ///
    /// Problems with what the user asked for (missing files, unknown
    /// courses) exit with 2; everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigNotFound { .. }
            | Self::CatalogNotFound { .. }
            | Self::UnknownCourse { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for prereqs operations.
pub type Result<T> = std::result::Result<T, PrereqError>;
