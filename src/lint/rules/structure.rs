//! Top-level document structure checks.

use crate::document::Document;
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};

/// Checks the required top-level fields of both document shapes.
pub struct DocumentStructureRule;

impl LintRule for DocumentStructureRule {
    fn id(&self) -> RuleId {
        RuleId::new("document-structure")
    }

    fn name(&self) -> &str {
        "Document Structure"
    }

    fn description(&self) -> &str {
        "Required top-level fields and version marker"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        match document {
            Document::Paste(doc) => {
                if doc.doc_type.as_deref() != Some("block") {
                    diagnostics.push(self.error(
                        "Missing or invalid \"type\" property (must be \"block\")",
                        "type",
                    ));
                }

                if doc.gutenberg_block.is_none() {
                    diagnostics
                        .push(self.error("Missing \"gutenbergBlock\" property", "gutenbergBlock"));
                }

                if doc.version != Some(2) {
                    diagnostics.push(self.error("Invalid version (must be 2)", "version"));
                }

                if doc.styles.is_none() {
                    diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            Severity::Warning,
                            "Missing \"styles\" object (usually required)",
                        )
                        .with_path("styles"),
                    );
                }
            }
            Document::Api(doc) => {
                if doc.name.is_none() {
                    diagnostics.push(self.error("Missing \"name\" property", "name"));
                }

                if doc.key.is_none() {
                    diagnostics.push(self.error("Missing \"key\" property", "key"));
                }

                match &doc.blocks {
                    None => {
                        diagnostics.push(self.error("Missing \"blocks\" array", "blocks"));
                    }
                    Some(blocks) if blocks.is_empty() => {
                        diagnostics.push(self.error("\"blocks\" array must not be empty", "blocks"));
                    }
                    Some(_) => {}
                }

                match &doc.properties {
                    None => {
                        diagnostics.push(
                            LintDiagnostic::new(
                                self.id(),
                                Severity::Warning,
                                "Missing \"properties\" array",
                            )
                            .with_path("properties"),
                        );
                    }
                    Some(properties) => {
                        for (index, prop) in properties.iter().enumerate() {
                            let path = format!("properties[{index}]");
                            if prop.key.is_none() || prop.name.is_none() {
                                diagnostics.push(self.error(
                                    format!("Missing key or name for property {index}"),
                                    &path,
                                ));
                            }
                            let primitive = prop
                                .property_type
                                .as_ref()
                                .and_then(|t| t.primitive.as_ref());
                            if primitive.is_none() {
                                diagnostics.push(self.error(
                                    format!(
                                        "Invalid type for property \"{}\"",
                                        prop.key.as_deref().unwrap_or("<unnamed>")
                                    ),
                                    &path,
                                ));
                            }
                        }
                    }
                }
            }
        }

        diagnostics
    }
}

impl DocumentStructureRule {
    fn error(&self, message: impl Into<String>, path: &str) -> LintDiagnostic {
        LintDiagnostic::new(self.id(), Severity::Error, message).with_path(path)
    }
}
