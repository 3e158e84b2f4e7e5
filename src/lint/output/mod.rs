//! Lint output formatters.
//!
//! This module provides formatters for outputting validation reports in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::report::LintReport;
use std::io::Write;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected human or json)")),
        }
    }
}

/// Trait for formatting a validation report.
pub trait LintFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
