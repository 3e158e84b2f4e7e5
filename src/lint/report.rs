//! Aggregated validation results.

use super::diagnostic::LintDiagnostic;
use super::rule::Severity;

/// All diagnostics from one validation run, in rule registration order.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    diagnostics: Vec<LintDiagnostic>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single diagnostic.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append a batch of diagnostics, preserving their order.
    pub fn extend(&mut self, diagnostics: Vec<LintDiagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// All diagnostics, in emission order.
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Diagnostics at exactly the given severity.
    pub fn at_severity(&self, severity: Severity) -> impl Iterator<Item = &LintDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.at_severity(Severity::Error).count()
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.at_severity(Severity::Warning).count()
    }

    /// Number of info diagnostics.
    pub fn info_count(&self) -> usize {
        self.at_severity(Severity::Info).count()
    }

    /// Whether any error diagnostics were emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Whether any warning diagnostics were emitted.
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// A document is valid when it produced zero errors. Warnings and info
    /// notes do not affect validity.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the report is completely clean.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rule::RuleId;

    fn diag(severity: Severity) -> LintDiagnostic {
        LintDiagnostic::new(RuleId::new("test"), severity, "msg")
    }

    #[test]
    fn empty_report_is_valid() {
        let report = LintReport::new();
        assert!(report.is_empty());
        assert!(report.is_valid());
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn counts_by_severity() {
        let mut report = LintReport::new();
        report.extend(vec![
            diag(Severity::Error),
            diag(Severity::Warning),
            diag(Severity::Warning),
            diag(Severity::Info),
        ]);

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert_eq!(report.info_count(), 1);
        assert_eq!(report.len(), 4);
    }

    #[test]
    fn warnings_do_not_invalidate() {
        let mut report = LintReport::new();
        report.push(diag(Severity::Warning));
        report.push(diag(Severity::Info));
        assert!(report.is_valid());
        assert!(report.has_warnings());

        report.push(diag(Severity::Error));
        assert!(!report.is_valid());
    }

    #[test]
    fn preserves_emission_order() {
        let mut report = LintReport::new();
        report.push(LintDiagnostic::new(
            RuleId::new("a"),
            Severity::Warning,
            "first",
        ));
        report.push(LintDiagnostic::new(
            RuleId::new("b"),
            Severity::Error,
            "second",
        ));

        let messages: Vec<_> = report.diagnostics().iter().map(|d| &d.message).collect();
        assert_eq!(messages, ["first", "second"]);
    }
}
