//! Error types for etchkit operations.
//!
//! This module defines [`EtchError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EtchError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EtchError::Other`) for unexpected errors
//! - Rule evaluators never return errors: they append diagnostics to the
//!   report and return normally

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for etchkit operations.
#[derive(Debug, Error)]
pub enum EtchError {
    /// Component document not found at the given path.
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// Failed to parse a component document as JSON.
    #[error("Failed to parse {path}: {message}")]
    DocumentParseError { path: PathBuf, message: String },

    /// Failed to parse the project configuration record.
    #[error("Failed to parse project config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A pattern could not be fetched from the pattern library.
    #[error("Failed to collect pattern '{slug}': {message}")]
    PatternFetchError { slug: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for etchkit operations.
pub type Result<T> = std::result::Result<T, EtchError>;
