//! etchkit - Validation and authoring toolkit for Etch page-builder components.
//!
//! etchkit validates the JSON documents the Etch WordPress page builder
//! exchanges through its paste and API surfaces, and carries the small
//! authoring workflows around them: project setup, script payload encoding,
//! and pattern template collection.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The `.etch-project.json` project record
//! - [`document`] - Component document model and format detection
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Pattern library fetcher
//! - [`lint`] - Document validation rules, engine, and report formatting
//! - [`payload`] - Script payload codec and text checks
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use etchkit::lint::{LintContext, Validator};
//!
//! let validator = Validator::new(LintContext::default());
//! let report = validator
//!     .validate_source(r#"{ "type": "block" }"#)
//!     .unwrap();
//! assert!(!report.is_valid());
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod lint;
pub mod payload;
pub mod ui;

pub use error::{EtchError, Result};
