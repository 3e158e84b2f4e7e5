//! Block tree checks.
//!
//! A recursive walker over the content tree with an explicit path
//! accumulator. Per-node checks dispatch on the block kind; a node missing
//! its `blockName` or `attrs` stops traversal of that node only, never of
//! its siblings.

use serde_json::Value;

use crate::document::{Block, BlockAttrs, Document};
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};

/// Block names the editor ships; anything else outside `core/` is suspect.
pub const KNOWN_BLOCK_NAMES: &[&str] = &[
    "etch/element",
    "etch/text",
    "etch/svg",
    "etch/component",
    "etch/loop",
    "etch/condition",
    "etch/slot-content",
    "etch/slot-placeholder",
];

/// Roles accepted in `data-etch-element`, each with its canonical system
/// style that the block should also declare.
const ETCH_ELEMENT_ROLES: &[(&str, &str)] = &[
    ("section", "etch-section-style"),
    ("container", "etch-container-style"),
    ("flex-div", "etch-flex-div-style"),
    ("iframe", "etch-iframe-style"),
];

const RULE_ID: &str = "block-tree";

/// Validates every node of the content tree.
pub struct BlockTreeRule;

impl LintRule for BlockTreeRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "Block Tree"
    }

    fn description(&self) -> &str {
        "Per-node checks over the recursive block tree"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        match document {
            Document::Paste(doc) => {
                if let Some(root) = &doc.gutenberg_block {
                    walk_block(root, "gutenbergBlock", &mut diagnostics);
                }
            }
            Document::Api(doc) => {
                if let Some(blocks) = &doc.blocks {
                    for (index, block) in blocks.iter().enumerate() {
                        walk_block(block, &format!("blocks[{index}]"), &mut diagnostics);
                    }
                }
            }
        }

        diagnostics
    }
}

/// Walk one block and its descendants, appending diagnostics.
///
/// Also used for the block trees inside component definitions, which carry
/// their own path roots.
pub(crate) fn walk_block(block: &Block, path: &str, diagnostics: &mut Vec<LintDiagnostic>) {
    let Some(block_name) = &block.block_name else {
        diagnostics.push(error(format!("Missing \"blockName\" at {path}"), path));
        return;
    };

    if !KNOWN_BLOCK_NAMES.contains(&block_name.as_str()) && !block_name.starts_with("core/") {
        diagnostics.push(warning(
            format!("Unknown blockName \"{block_name}\" at {path}"),
            path,
        ));
    }

    let Some(attrs) = &block.attrs else {
        diagnostics.push(error(format!("Missing \"attrs\" at {path}"), path));
        return;
    };

    if block_name == "etch/element" {
        check_element(attrs, path, diagnostics);
    }

    if block_name == "etch/component" {
        if attrs.component_ref.is_none() {
            diagnostics.push(error(
                format!("Missing \"ref\" attribute for etch/component at {path}"),
                path,
            ));
        }

        if let Some(attributes) = &attrs.attributes {
            for (key, value) in attributes {
                if matches!(value, Value::Bool(_)) {
                    diagnostics.push(
                        error(
                            format!(
                                "Boolean prop \"{key}\" must be string-wrapped \
                                 (\"{{true}}\" or \"{{false}}\"), not raw boolean at {path}"
                            ),
                            path,
                        )
                        .with_suggestion(format!("\"{key}\": \"{{{value}}}\"")),
                    );
                }
            }
        }
    }

    if let Some(inner_blocks) = &block.inner_blocks {
        let null_count = block.inner_content_null_count();
        if null_count != inner_blocks.len() {
            diagnostics.push(warning(
                format!(
                    "innerContent null count ({null_count}) doesn't match \
                     innerBlocks length ({}) at {path}",
                    inner_blocks.len()
                ),
                path,
            ));
        }

        for (index, inner) in inner_blocks.iter().enumerate() {
            walk_block(inner, &format!("{path}.innerBlocks[{index}]"), diagnostics);
        }
    }
}

fn check_element(attrs: &BlockAttrs, path: &str, diagnostics: &mut Vec<LintDiagnostic>) {
    if attrs.tag.is_none() {
        diagnostics.push(error(
            format!("Missing \"tag\" attribute for etch/element at {path}"),
            path,
        ));
    }

    let attributes = attrs.attributes.as_ref();

    if let Some(role) = attributes
        .and_then(|a| a.get("data-etch-element"))
        .and_then(Value::as_str)
    {
        match ETCH_ELEMENT_ROLES.iter().find(|(name, _)| *name == role) {
            None => {
                let valid: Vec<_> = ETCH_ELEMENT_ROLES.iter().map(|(name, _)| *name).collect();
                diagnostics.push(error(
                    format!(
                        "Invalid data-etch-element=\"{role}\" at {path}. \
                         Must be one of: {}",
                        valid.join(", ")
                    ),
                    path,
                ));
            }
            Some((_, expected_style)) => {
                let declared = attrs
                    .styles
                    .as_ref()
                    .is_some_and(|styles| styles.iter().any(|s| s == expected_style));
                if !declared {
                    diagnostics.push(warning(
                        format!(
                            "data-etch-element=\"{role}\" should include \
                             \"{expected_style}\" in styles array at {path}"
                        ),
                        path,
                    ));
                }
            }
        }
    }

    // A script nested under attributes is silently dropped by the editor.
    if attributes.is_some_and(|a| a.contains_key("script")) {
        diagnostics.push(error(
            format!("Script should be in \"attrs.script\", NOT \"attrs.attributes.script\" at {path}"),
            path,
        ));
    }

    if attributes
        .and_then(|a| a.get("role"))
        .and_then(Value::as_str)
        == Some("dialog")
    {
        let labelled = attributes.is_some_and(|a| {
            a.contains_key("aria-label") || a.contains_key("aria-labelledby")
        });
        if !labelled {
            diagnostics.push(warning(
                format!("role=\"dialog\" needs aria-label or aria-labelledby at {path}"),
                path,
            ));
        }
    }

    if attrs.tag.as_deref() == Some("img") && !attributes.is_some_and(|a| a.contains_key("alt")) {
        diagnostics.push(warning(
            format!("<img> element is missing an \"alt\" attribute at {path}"),
            path,
        ));
    }
}

fn error(message: String, path: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Error, message).with_path(path)
}

fn warning(message: String, path: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Warning, message).with_path(path)
}
