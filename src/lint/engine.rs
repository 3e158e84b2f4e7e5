//! Validation driver.
//!
//! [`Validator`] owns a rule registry and a [`LintContext`] and turns one
//! JSON document into one [`LintReport`]. Malformed JSON is the only hard
//! failure; everything past the parse becomes diagnostics.

use serde_json::Value;
use tracing::debug;

use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::report::LintReport;
use super::rule::{LintContext, RuleId, Severity};
use crate::document::{ApiDocument, Document, DocumentKind, PasteDocument};

/// Rule id for document-level shape failures raised by the driver itself.
const FORMAT_RULE: &str = "document-format";

/// Runs the registered rules over one document.
pub struct Validator {
    registry: RuleRegistry,
    context: LintContext,
}

impl Validator {
    /// A validator with the built-in rules and the given context.
    pub fn new(context: LintContext) -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
            context,
        }
    }

    /// A validator with a custom registry.
    pub fn with_registry(registry: RuleRegistry, context: LintContext) -> Self {
        Self { registry, context }
    }

    /// Parse and validate raw JSON text.
    ///
    /// Returns `Err` only when the text is not JSON at all; any recognizable
    /// document, however broken, produces a report instead.
    pub fn validate_source(&self, source: &str) -> Result<LintReport, serde_json::Error> {
        let value: Value = serde_json::from_str(source)?;
        Ok(self.validate_value(&value))
    }

    /// Validate an already-parsed JSON value.
    pub fn validate_value(&self, value: &Value) -> LintReport {
        let kind = DocumentKind::detect(value);
        debug!(kind = %kind, "detected document shape");

        let document = match kind {
            DocumentKind::Paste => match serde_json::from_value::<PasteDocument>(value.clone()) {
                Ok(doc) => Document::Paste(doc),
                Err(e) => return Self::format_failure_report(&e.to_string()),
            },
            DocumentKind::Api => match serde_json::from_value::<ApiDocument>(value.clone()) {
                Ok(doc) => Document::Api(doc),
                Err(e) => return Self::format_failure_report(&e.to_string()),
            },
            DocumentKind::Unknown => {
                return Self::format_failure_report(
                    "Unrecognized document shape: expected a paste payload \
                     (type \"block\" with gutenbergBlock) or an API payload \
                     (name, key, blocks)",
                );
            }
        };

        let mut report = LintReport::new();
        for rule in self.registry.iter() {
            let diagnostics = rule.check(&document, &self.context);
            debug!(rule = %rule.id(), count = diagnostics.len(), "rule finished");
            report.extend(diagnostics);
        }
        report
    }

    fn format_failure_report(message: &str) -> LintReport {
        let mut report = LintReport::new();
        report.push(LintDiagnostic::new(
            RuleId::new(FORMAT_RULE),
            Severity::Error,
            message,
        ));
        report
    }
}
