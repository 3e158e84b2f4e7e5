//! JSON output formatter.
//!
//! Formats validation reports as machine-readable JSON for tooling
//! integration.

use serde::Serialize;
use std::io::Write;

use super::LintFormatter;
use crate::lint::report::LintReport;
use crate::lint::rule::Severity;

/// Formats validation output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    valid: bool,
    diagnostics: Vec<JsonDiagnostic>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule_id: String,
    severity: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    info: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn severity_to_string(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let diagnostics: Vec<_> = report
            .diagnostics()
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: d.rule_id.0.clone(),
                severity: Self::severity_to_string(d.severity).to_string(),
                message: d.message.clone(),
                path: d.path.clone(),
                suggestion: d.suggestion.clone(),
            })
            .collect();

        let output = JsonOutput {
            valid: report.is_valid(),
            diagnostics,
            summary: JsonSummary {
                total: report.len(),
                errors: report.error_count(),
                warnings: report.warning_count(),
                info: report.info_count(),
            },
        };

        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer, "{json}")
    }
}
