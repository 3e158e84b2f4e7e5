//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing issues
//! found during document validation, with an optional JSON path for locating
//! the offending node.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Dotted JSON path to the offending node, e.g.
    /// `gutenbergBlock.innerBlocks[2].attrs`.
    pub path: Option<String>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            path: None,
            suggestion: None,
        }
    }

    /// Add a JSON path to this diagnostic.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
