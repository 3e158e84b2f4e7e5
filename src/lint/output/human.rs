//! Human-readable output formatter.
//!
//! Sections mirror the severity order a reader triages in: errors first,
//! then warnings, then info notes, then a one-line summary that is always
//! printed.

use console::Style;
use std::io::Write;

use super::LintFormatter;
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::report::LintReport;
use crate::lint::rule::Severity;

/// Formats validation output for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn style_for(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match severity {
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow(),
            Severity::Info => Style::new().cyan(),
        }
    }

    fn write_section<W: Write>(
        &self,
        report: &LintReport,
        severity: Severity,
        heading: &str,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let diagnostics: Vec<&LintDiagnostic> = report.at_severity(severity).collect();
        if diagnostics.is_empty() {
            return Ok(());
        }

        writeln!(writer, "{}", self.style_for(severity).apply_to(heading))?;
        for diag in diagnostics {
            writeln!(writer, "  • [{}] {}", diag.rule_id, diag.message)?;
            if let Some(path) = &diag.path {
                writeln!(writer, "      --> {path}")?;
            }
            if let Some(suggestion) = &diag.suggestion {
                writeln!(writer, "      = help: {suggestion}")?;
            }
        }
        writeln!(writer)
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        self.write_section(report, Severity::Error, "Errors (must fix):", writer)?;
        self.write_section(report, Severity::Warning, "Warnings (should review):", writer)?;
        self.write_section(report, Severity::Info, "Info:", writer)?;

        if report.is_empty() {
            let ok = if self.use_color {
                Style::new().green()
            } else {
                Style::new()
            };
            writeln!(writer, "{}", ok.apply_to("Validation passed, no issues found."))?;
        }

        writeln!(
            writer,
            "Summary: {} error(s), {} warning(s), {} info",
            report.error_count(),
            report.warning_count(),
            report.info_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rule::RuleId;

    fn render(report: &LintReport) -> String {
        let mut buffer = Vec::new();
        HumanFormatter::new(false)
            .format(report, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn clean_report_prints_pass_and_summary() {
        let output = render(&LintReport::new());
        assert!(output.contains("Validation passed"));
        assert!(output.contains("Summary: 0 error(s), 0 warning(s), 0 info"));
    }

    #[test]
    fn sections_appear_in_severity_order() {
        let mut report = LintReport::new();
        report.push(LintDiagnostic::new(
            RuleId::new("styles"),
            Severity::Warning,
            "a warning",
        ));
        report.push(
            LintDiagnostic::new(RuleId::new("block-tree"), Severity::Error, "an error")
                .with_path("gutenbergBlock")
                .with_suggestion("do the thing"),
        );

        let output = render(&report);
        let errors_at = output.find("Errors (must fix):").unwrap();
        let warnings_at = output.find("Warnings (should review):").unwrap();
        assert!(errors_at < warnings_at);
        assert!(output.contains("--> gutenbergBlock"));
        assert!(output.contains("= help: do the thing"));
        assert!(output.contains("Summary: 1 error(s), 1 warning(s), 0 info"));
    }
}
