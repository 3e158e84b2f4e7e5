//! Loop definition checks.

use crate::document::Document;
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};

const RULE_ID: &str = "loops";

/// Data-source kinds the editor ships.
pub const VALID_LOOP_TYPES: &[&str] = &["wp-query", "json", "terms", "users", "api"];

/// Validates the `loops` map of a paste document.
pub struct LoopsRule;

impl LintRule for LoopsRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "Loops"
    }

    fn description(&self) -> &str {
        "Loop identity and data-source configuration"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        let Document::Paste(doc) = document else {
            return diagnostics;
        };
        let Some(loops) = &doc.loops else {
            return diagnostics;
        };

        for (id, r#loop) in loops {
            if r#loop.name.is_none() || r#loop.key.is_none() {
                diagnostics.push(
                    LintDiagnostic::new(
                        RuleId::new(RULE_ID),
                        Severity::Error,
                        format!("Missing name or key for loop {id}"),
                    )
                    .with_path(format!("loops.{id}")),
                );
            }

            let loop_type = r#loop.config.as_ref().and_then(|c| c.loop_type.as_deref());
            match loop_type {
                None => {
                    diagnostics.push(
                        LintDiagnostic::new(
                            RuleId::new(RULE_ID),
                            Severity::Error,
                            format!("Missing config.type for loop {id}"),
                        )
                        .with_path(format!("loops.{id}.config")),
                    );
                }
                Some(kind) if !VALID_LOOP_TYPES.contains(&kind) => {
                    diagnostics.push(
                        LintDiagnostic::new(
                            RuleId::new(RULE_ID),
                            Severity::Warning,
                            format!("Unknown loop type \"{kind}\" for loop {id}"),
                        )
                        .with_path(format!("loops.{id}.config.type"))
                        .with_suggestion(format!("Known types: {}", VALID_LOOP_TYPES.join(", "))),
                    );
                }
                Some(_) => {}
            }
        }

        diagnostics
    }
}
