//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Info, Warning, Error)

use super::diagnostic::LintDiagnostic;
use crate::document::Document;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational note, does not affect validity.
    Info,
    /// Warning that should be reviewed before shipping.
    Warning,
    /// Error that makes the document unusable in the editor.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Context shared by all rules during one validation run.
#[derive(Debug, Clone, Default)]
pub struct LintContext {
    /// Project class prefix from the project record or a CLI override.
    pub prefix: Option<String>,
}

/// A lint rule that validates one aspect of a component document.
///
/// Each rule covers one concern (structure, block tree, styles, ...) and may
/// emit diagnostics at several severities under its single rule id. Rules
/// never fail: problems become diagnostics, not errors.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the document and return any diagnostics.
    fn check(&self, document: &Document, ctx: &LintContext) -> Vec<LintDiagnostic>;
}
