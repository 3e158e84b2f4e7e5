//! Style object and CSS heuristics.
//!
//! Each heuristic fires at most once per style to keep reports readable even
//! on large stylesheets. Heuristics are warnings by design: CSS the checker
//! dislikes still renders.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::document::{Document, Style};
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};
use crate::payload;

const RULE_ID: &str = "styles";

static NESTED_CLASSES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\w+-\w+\s+\.\w+-\w+").unwrap());

static HARDCODED_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#[0-9a-f]{3,6}|rgba?\(").unwrap());

static PX_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+px").unwrap());

static BORDER_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^border(-(top|right|bottom|left))?$").unwrap());

/// ACSS variable families that do not exist; frequent guesses.
const INVALID_VAR_PREFIXES: &[&str] = &[
    "var(--padding-",
    "var(--margin-",
    "var(--color-",
    "var(--spacing-",
    "var(--btn-",
];

/// Validates the styles map: ids, required fields, and CSS heuristics.
pub struct StylesRule;

impl LintRule for StylesRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "Styles"
    }

    fn description(&self) -> &str {
        "Style ids, required fields, and common CSS mistakes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(styles) = document_styles(document) {
            for (id, style) in styles {
                check_style(id, style, &mut diagnostics);
            }
        }

        diagnostics
    }
}

pub(crate) fn document_styles(document: &Document) -> Option<&BTreeMap<String, Style>> {
    match document {
        Document::Paste(doc) => doc.styles.as_ref(),
        Document::Api(doc) => doc.styles.as_ref(),
    }
}

fn check_style(id: &str, style: &Style, diagnostics: &mut Vec<LintDiagnostic>) {
    if !payload::is_generated_id(id) && !id.starts_with("etch-") {
        diagnostics.push(warning(
            format!(
                "Style ID \"{id}\" should be 7 random alphanumeric characters (e.g., \"q2fy3v0\")"
            ),
            id,
        ));
    }

    let type_is_valid = matches!(style.style_type.as_deref(), Some("class") | Some("element"));
    if !type_is_valid {
        diagnostics.push(error(
            format!("Invalid style.type for \"{id}\" (must be \"class\" or \"element\")"),
            id,
        ));
    }

    if style.selector.is_none() {
        diagnostics.push(error(format!("Missing selector for style \"{id}\""), id));
    }

    if let Some(css) = &style.css {
        check_css(css, style.selector.as_deref().unwrap_or(""), id, diagnostics);
    }
}

fn check_css(css: &str, selector: &str, id: &str, diagnostics: &mut Vec<LintDiagnostic>) {
    if NESTED_CLASSES.is_match(css) {
        diagnostics.push(warning(
            format!(
                "Style \"{id}\" may contain nested components. \
                 Each component should have its own style object."
            ),
            id,
        ));
    }

    if HARDCODED_COLOR.is_match(css) {
        diagnostics.push(
            warning(format!("Style \"{id}\" contains hardcoded colors"), id).with_suggestion(
                "Use ACSS color variables (var(--bg-light), var(--text-dark), etc.)",
            ),
        );
    }

    let mut px_reported = false;
    let mut border_reported = false;
    for declaration in css.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }

        if !px_reported && PX_VALUE.is_match(declaration) && !declaration.contains("var(--") {
            diagnostics.push(
                warning(format!("Style \"{id}\" contains hardcoded px spacing"), id)
                    .with_suggestion("Use ACSS spacing variables (var(--space-m), etc.)"),
            );
            px_reported = true;
        }

        if let Some((property, value)) = declaration.split_once(':') {
            let property = property.trim().rsplit(|c: char| c.is_whitespace() || c == '{')
                .next()
                .unwrap_or("")
                .trim();
            if !border_reported
                && BORDER_PROPERTY.is_match(property)
                && !value.contains("var(--border")
            {
                diagnostics.push(
                    warning(
                        format!("Style \"{id}\" hardcodes a border declaration"),
                        id,
                    )
                    .with_suggestion("Use var(--border) or the var(--border-*) family"),
                );
                border_reported = true;
            }
        }
    }

    if INVALID_VAR_PREFIXES.iter().any(|p| css.contains(p)) {
        diagnostics.push(warning(
            format!(
                "Style \"{id}\" may contain invalid ACSS variable name. \
                 Verify against documentation."
            ),
            id,
        ));
    }

    let interactive = format!("{selector} {css}");
    if interactive.contains(":hover") && !interactive.contains(":focus-visible") {
        diagnostics.push(
            warning(
                format!("Style \"{id}\" styles :hover without :focus-visible"),
                id,
            )
            .with_suggestion("Keyboard users need the same affordance; add :focus-visible"),
        );
    }
}

fn error(message: String, id: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Error, message)
        .with_path(format!("styles.{id}"))
}

fn warning(message: String, id: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Warning, message)
        .with_path(format!("styles.{id}"))
}
