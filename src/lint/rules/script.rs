//! Embedded script payload checks.
//!
//! Payloads are decoded and pattern-matched, never executed. The transport
//! checks (line breaks, alphabet, decodability) gate the content checks: a
//! payload that cannot be decoded skips its content pass but never stops
//! other payloads in the same document.

use crate::document::{Block, Document, ScriptPayload};
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};
use crate::payload;

const RULE_ID: &str = "script-payload";

/// Validates every `attrs.script` payload in the document.
pub struct ScriptPayloadRule;

impl LintRule for ScriptPayloadRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "Script Payload"
    }

    fn description(&self) -> &str {
        "Base64 transport shape and static content checks for embedded scripts"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (path, script) in collect_payloads(document) {
            check_payload(script, &path, &mut diagnostics);
        }

        diagnostics
    }
}

/// Every script payload in the document, paired with its JSON path.
fn collect_payloads(document: &Document) -> Vec<(String, &ScriptPayload)> {
    let mut payloads = Vec::new();

    match document {
        Document::Paste(doc) => {
            if let Some(root) = &doc.gutenberg_block {
                collect_from_block(root, "gutenbergBlock", &mut payloads);
            }
            if let Some(components) = &doc.components {
                for (id, component) in components {
                    if let Some(blocks) = &component.blocks {
                        for (index, block) in blocks.iter().enumerate() {
                            collect_from_block(
                                block,
                                &format!("components.{id}.blocks[{index}]"),
                                &mut payloads,
                            );
                        }
                    }
                }
            }
        }
        Document::Api(doc) => {
            if let Some(blocks) = &doc.blocks {
                for (index, block) in blocks.iter().enumerate() {
                    collect_from_block(block, &format!("blocks[{index}]"), &mut payloads);
                }
            }
        }
    }

    payloads
}

fn collect_from_block<'a>(
    block: &'a Block,
    path: &str,
    payloads: &mut Vec<(String, &'a ScriptPayload)>,
) {
    if let Some(script) = block.attrs.as_ref().and_then(|a| a.script.as_ref()) {
        payloads.push((format!("{path}.attrs.script"), script));
    }

    if let Some(inner_blocks) = &block.inner_blocks {
        for (index, inner) in inner_blocks.iter().enumerate() {
            collect_from_block(inner, &format!("{path}.innerBlocks[{index}]"), payloads);
        }
    }
}

/// Run the transport and content checks for one payload.
fn check_payload(script: &ScriptPayload, path: &str, diagnostics: &mut Vec<LintDiagnostic>) {
    if let Some(id) = &script.id {
        if !payload::is_generated_id(id) {
            diagnostics.push(warning(
                format!("Script ID \"{id}\" should be 7 random alphanumeric characters at {path}"),
                path,
            ));
        }
    }

    let Some(code) = &script.code else {
        diagnostics.push(error(
            format!("Missing \"code\" in script payload at {path}"),
            path,
        ));
        return;
    };

    // The transport checks are independent of each other; only the decode
    // is gated on them.
    let mut transport_broken = false;

    if code.contains('\n') || code.contains('\r') {
        diagnostics.push(error(
            format!("Base64 encoded script must be a single line (no line breaks) at {path}"),
            path,
        ));
        transport_broken = true;
    }

    if !payload::is_base64_alphabet(code) {
        diagnostics.push(error(
            format!("Script code contains characters outside the base64 alphabet at {path}"),
            path,
        ));
        transport_broken = true;
    }

    if transport_broken {
        return;
    }

    let decoded = match payload::decode(code) {
        Ok(text) => text,
        Err(e) => {
            diagnostics.push(error(
                format!("Script code failed to decode at {path}: {e}"),
                path,
            ));
            return;
        }
    };

    check_decoded(&decoded, path, diagnostics);
}

/// Static checks over the decoded script text.
fn check_decoded(code: &str, path: &str, diagnostics: &mut Vec<LintDiagnostic>) {
    for typo in payload::find_typos(code) {
        diagnostics.push(
            error(
                format!("Script contains typo \"{}\" at {path}", typo.name),
                path,
            )
            .with_suggestion(format!("Replace \"{}\" with \"{}\"", typo.name, typo.fix)),
        );
    }

    if let Some(snippet) = payload::single_operator_match(code) {
        diagnostics.push(
            warning(
                format!("Single \"&\" or \"|\" near \"{snippet}\" at {path}"),
                path,
            )
            .with_suggestion("Logical operators are usually \"&&\" or \"||\""),
        );
    }

    if payload::has_smart_quotes(code) {
        diagnostics.push(warning(
            format!("Script contains curly quotes; use straight quotes at {path}"),
            path,
        ));
    }

    for pair in payload::unbalanced_delimiters(code) {
        diagnostics.push(error(
            format!(
                "Unbalanced \"{}{}\" in script: {} opening vs {} closing at {path}",
                pair.open, pair.close, pair.opens, pair.closes
            ),
            path,
        ));
    }

    if payload::missing_plugin_registration(code) {
        diagnostics.push(error(
            format!(
                "ScrollTrigger is used without gsap.registerPlugin(ScrollTrigger) at {path}"
            ),
            path,
        ));
    }

    if payload::has_console_logging(code) {
        diagnostics.push(LintDiagnostic::new(
            RuleId::new(RULE_ID),
            Severity::Info,
            format!("Script contains console logging at {path}"),
        ));
    }
}

fn error(message: String, path: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Error, message).with_path(path)
}

fn warning(message: String, path: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Warning, message).with_path(path)
}
