//! BEM and prefix naming checks over class tokens.
//!
//! Tokens come from both the style selectors and any class references inside
//! the CSS bodies. The grammar is `prefix-block(__element)?(--modifier)?`
//! with kebab-case words throughout. System styles (`etch-`) and ACSS button
//! utilities (`btn`) are reserved and skipped.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::document::Document;
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};
use crate::lint::rules::styles::document_styles;

const RULE_ID: &str = "bem-convention";

static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z][A-Za-z0-9_-]*)").unwrap());

static BEM_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z][a-z0-9]*(-[a-z0-9]+)*(__[a-z0-9]+(-[a-z0-9]+)*)?(--[a-z0-9]+(-[a-z0-9]+)*)?$",
    )
    .unwrap()
});

/// Checks every class token against the project naming convention.
pub struct BemConventionRule;

impl LintRule for BemConventionRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "BEM Convention"
    }

    fn description(&self) -> &str {
        "Prefixed BEM class naming over selectors and CSS bodies"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, document: &Document, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        let Some(styles) = document_styles(document) else {
            return diagnostics;
        };

        // The hyphen heuristic compares tokens across styles, so collect the
        // whole document's token set first.
        let mut per_style = Vec::new();
        let mut all_tokens = BTreeSet::new();
        for (id, style) in styles {
            let mut tokens = BTreeSet::new();
            for text in [style.selector.as_deref(), style.css.as_deref()]
                .into_iter()
                .flatten()
            {
                for capture in CLASS_TOKEN.captures_iter(text) {
                    tokens.insert(capture[1].to_string());
                }
            }
            all_tokens.extend(tokens.iter().cloned());
            per_style.push((id, tokens));
        }

        for (id, tokens) in per_style {
            for token in tokens {
                check_token(&token, id, ctx.prefix.as_deref(), &all_tokens, &mut diagnostics);
            }
        }

        diagnostics
    }
}

fn is_reserved(token: &str) -> bool {
    token.starts_with("etch-") || token == "btn" || token.starts_with("btn--")
}

fn check_token(
    token: &str,
    style_id: &str,
    prefix: Option<&str>,
    all_tokens: &BTreeSet<String>,
    diagnostics: &mut Vec<LintDiagnostic>,
) {
    if is_reserved(token) {
        return;
    }

    let mut flagged = false;

    if token.chars().any(|c| c.is_ascii_uppercase()) {
        diagnostics.push(
            error(
                format!("Class \"{token}\" uses upper-case characters in style \"{style_id}\""),
                style_id,
            )
            .with_suggestion(format!("Rename to \"{}\"", to_kebab(token))),
        );
        flagged = true;
    }

    if token.matches("__").count() > 1 {
        diagnostics.push(error(
            format!("Class \"{token}\" has more than one \"__\" element separator in style \"{style_id}\""),
            style_id,
        ));
        flagged = true;
    }

    if token.matches("--").count() > 1 {
        diagnostics.push(error(
            format!("Class \"{token}\" has more than one \"--\" modifier separator in style \"{style_id}\""),
            style_id,
        ));
        flagged = true;
    }

    if !token.contains("__") && !token.contains("--") {
        if let Some(base) = hyphen_element_base(token, all_tokens) {
            let element = &token[base.len() + 1..];
            diagnostics.push(
                warning(
                    format!(
                        "Class \"{token}\" uses \"-\" where \"__\" separates the \
                         element from \"{base}\" in style \"{style_id}\""
                    ),
                    style_id,
                )
                .with_suggestion(format!("BEM elements use \"__\": \"{base}__{element}\"")),
            );
            flagged = true;
        }
    }

    if token.replace("__", "").contains('_') {
        diagnostics.push(
            warning(
                format!("Class \"{token}\" uses a single \"_\" in style \"{style_id}\""),
                style_id,
            )
            .with_suggestion(format!("BEM elements use \"__\": \"{}\"", fix_single_underscores(token))),
        );
        flagged = true;
    }

    if let Some(prefix) = prefix {
        if !token.starts_with(&format!("{prefix}-")) {
            diagnostics.push(
                error(
                    format!(
                        "Class \"{token}\" is missing the project prefix \"{prefix}-\" \
                         in style \"{style_id}\""
                    ),
                    style_id,
                )
                .with_suggestion(format!("Expected form: {prefix}-block__element--modifier")),
            );
            flagged = true;
        }
    }

    if !flagged && !BEM_GRAMMAR.is_match(token) {
        diagnostics.push(warning(
            format!(
                "Class \"{token}\" does not follow the block__element--modifier \
                 convention in style \"{style_id}\""
            ),
            style_id,
        ));
    }
}

/// Longest other class token that `token` extends with `-suffix`.
///
/// `.pfx-hero-title` next to a declared `.pfx-hero` almost always meant
/// `.pfx-hero__title`. Only plain block tokens count as bases.
fn hyphen_element_base<'a>(token: &str, all_tokens: &'a BTreeSet<String>) -> Option<&'a str> {
    all_tokens
        .iter()
        .filter(|base| {
            base.as_str() != token
                && !base.contains("__")
                && !base.contains("--")
                && !is_reserved(base)
                && token.len() > base.len() + 1
                && token.starts_with(base.as_str())
                && token.as_bytes()[base.len()] == b'-'
        })
        .max_by_key(|base| base.len())
        .map(String::as_str)
}

/// camelCase / PascalCase to kebab-case.
fn to_kebab(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    for (i, c) in token.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Replace lone underscores with the BEM element separator.
fn fix_single_underscores(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 2);
    let chars: Vec<char> = token.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '_' {
            let mut run = 0;
            while i + run < chars.len() && chars[i + run] == '_' {
                run += 1;
            }
            out.push_str("__");
            i += run;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn error(message: String, style_id: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Error, message)
        .with_path(format!("styles.{style_id}"))
}

fn warning(message: String, style_id: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Warning, message)
        .with_path(format!("styles.{style_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PasteDocument;
    use serde_json::json;

    fn check(selector: &str, css: &str, prefix: Option<&str>) -> Vec<LintDiagnostic> {
        let doc: PasteDocument = serde_json::from_value(json!({
            "type": "block",
            "version": 2,
            "gutenbergBlock": { "blockName": "etch/element", "attrs": { "tag": "div" } },
            "styles": {
                "q2fy3v0": { "type": "class", "selector": selector, "css": css }
            }
        }))
        .unwrap();
        let ctx = LintContext {
            prefix: prefix.map(String::from),
        };
        BemConventionRule.check(&Document::Paste(doc), &ctx)
    }

    #[test]
    fn prefixed_bem_class_is_clean() {
        let diagnostics = check(".pfx-hero__title", "", Some("pfx"));
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
    }

    #[test]
    fn camel_case_is_an_error_with_kebab_suggestion() {
        let diagnostics = check(".myBlock", "", None);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(
            diagnostics[0].suggestion.as_deref(),
            Some("Rename to \"my-block\"")
        );
    }

    #[test]
    fn missing_prefix_is_an_error_with_expected_form() {
        let diagnostics = check(".hero__title", "", Some("pfx"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .suggestion
            .as_deref()
            .unwrap()
            .contains("pfx-block__element--modifier"));
    }

    #[test]
    fn double_element_separator_is_an_error() {
        let diagnostics = check(".pfx-card__header__title", "", Some("pfx"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("__"));
    }

    #[test]
    fn single_underscore_warns_with_rewrite() {
        let diagnostics = check(".pfx-card_title", "", Some("pfx"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0]
            .suggestion
            .as_deref()
            .unwrap()
            .contains("pfx-card__title"));
    }

    fn check_selectors(first: &str, second: &str, prefix: Option<&str>) -> Vec<LintDiagnostic> {
        let doc: PasteDocument = serde_json::from_value(json!({
            "type": "block",
            "version": 2,
            "gutenbergBlock": { "blockName": "etch/element", "attrs": { "tag": "div" } },
            "styles": {
                "q2fy3v0": { "type": "class", "selector": first, "css": "" },
                "q2fy3v1": { "type": "class", "selector": second, "css": "" }
            }
        }))
        .unwrap();
        let ctx = LintContext {
            prefix: prefix.map(String::from),
        };
        BemConventionRule.check(&Document::Paste(doc), &ctx)
    }

    #[test]
    fn hyphen_extension_of_declared_block_warns() {
        let diagnostics = check_selectors(".pfx-hero", ".pfx-hero-title", Some("pfx"));
        assert_eq!(diagnostics.len(), 1, "unexpected: {diagnostics:?}");
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("pfx-hero-title"));
        assert_eq!(
            diagnostics[0].suggestion.as_deref(),
            Some("BEM elements use \"__\": \"pfx-hero__title\"")
        );
    }

    #[test]
    fn modifier_form_is_not_mistaken_for_an_element() {
        let diagnostics = check_selectors(".pfx-hero", ".pfx-hero--dark", Some("pfx"));
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
    }

    #[test]
    fn hyphen_rewrite_uses_the_longest_declared_block() {
        let diagnostics = check(
            ".pfx-hero-card",
            ".pfx-hero { display: flex; } .pfx-hero-card-title { color: var(--base); }",
            Some("pfx"),
        );
        assert!(diagnostics.iter().any(|d| d.suggestion.as_deref()
            == Some("BEM elements use \"__\": \"pfx-hero-card__title\"")));
    }

    #[test]
    fn reserved_prefixes_are_skipped() {
        let diagnostics = check(".etch-section-style", ".btn--primary { color: red; }", Some("pfx"));
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
    }

    #[test]
    fn tokens_inside_css_bodies_are_checked() {
        let diagnostics = check(".pfx-hero", ".BadToken { display: flex; }", Some("pfx"));
        assert!(!diagnostics.is_empty());
        assert!(diagnostics.iter().any(|d| d.message.contains("BadToken")));
    }

    #[test]
    fn duplicate_tokens_reported_once() {
        let diagnostics = check(".myBlock", ".myBlock:hover { color: red; }", None);
        assert_eq!(diagnostics.len(), 1);
    }
}
