//! Integration tests for the validation engine against whole documents.

use etchkit::lint::{LintContext, Severity, Validator};
use etchkit::payload;
use serde_json::json;

fn validator() -> Validator {
    Validator::new(LintContext::default())
}

fn validator_with_prefix(prefix: &str) -> Validator {
    Validator::new(LintContext {
        prefix: Some(prefix.to_string()),
    })
}

fn paste_with_styles(styles: serde_json::Value) -> String {
    json!({
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/element",
            "attrs": { "tag": "div" },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": styles
    })
    .to_string()
}

#[test]
fn report_is_deterministic_across_runs() {
    let source = paste_with_styles(json!({
        "abc": { "type": "class", "selector": ".myBlock", "css": "color: #fff;" }
    }));

    let first = validator().validate_source(&source).unwrap();
    let second = validator().validate_source(&source).unwrap();
    assert_eq!(first.diagnostics(), second.diagnostics());
}

#[test]
fn unrecognized_shape_is_a_single_format_error() {
    let report = validator().validate_source(r#"{ "hello": "world" }"#).unwrap();
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.diagnostics()[0].rule_id.as_str(), "document-format");
}

#[test]
fn line_break_in_payload_is_an_error() {
    let source = json!({
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/element",
            "attrs": {
                "tag": "div",
                "script": { "id": "q2fy3v0", "code": "aGVsbG8=\nd29ybGQ=" }
            },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": {}
    })
    .to_string();

    let report = validator().validate_source(&source).unwrap();
    let payload_errors: Vec<_> = report
        .diagnostics()
        .iter()
        .filter(|d| d.rule_id.as_str() == "script-payload")
        .collect();
    // The line break also violates the alphabet; both errors are reported.
    assert_eq!(payload_errors.len(), 2);
    assert!(payload_errors.iter().all(|d| d.severity == Severity::Error));
    assert!(payload_errors
        .iter()
        .any(|d| d.message.contains("single line")));
}

#[test]
fn decodable_payload_with_typo_reports_fix() {
    let code = payload::encode("doccument.querySelector('.x')");
    let source = json!({
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/element",
            "attrs": {
                "tag": "div",
                "script": { "id": "q2fy3v0", "code": code }
            },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": {}
    })
    .to_string();

    let report = validator().validate_source(&source).unwrap();
    let typo = report
        .diagnostics()
        .iter()
        .find(|d| d.message.contains("doccument"))
        .expect("typo diagnostic");
    assert_eq!(typo.severity, Severity::Error);
    assert!(typo.suggestion.as_deref().unwrap().contains("document"));
}

#[test]
fn raw_boolean_component_attribute_is_one_error_per_key() {
    let source = json!({
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/component",
            "attrs": { "ref": 7, "attributes": { "open": true, "pinned": false } },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": {},
        "components": {}
    })
    .to_string();

    let report = validator().validate_source(&source).unwrap();
    let boolean_errors: Vec<_> = report
        .diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Error && d.message.contains("boolean"))
        .collect();
    assert_eq!(boolean_errors.len(), 2);
    assert!(boolean_errors
        .iter()
        .all(|d| d.suggestion.as_deref().unwrap().contains("{true}")
            || d.suggestion.as_deref().unwrap().contains("{false}")));
}

#[test]
fn component_key_mismatch_is_exactly_one_error() {
    let source = json!({
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/element",
            "attrs": { "tag": "div" },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": {},
        "components": {
            "12": {
                "id": 99,
                "name": "Card",
                "key": "card",
                "blocks": [{
                    "blockName": "etch/element",
                    "attrs": { "tag": "div" },
                    "innerBlocks": [],
                    "innerContent": []
                }]
            }
        }
    })
    .to_string();

    let report = validator().validate_source(&source).unwrap();
    let mismatches: Vec<_> = report
        .diagnostics()
        .iter()
        .filter(|d| d.rule_id.as_str() == "components" && d.severity == Severity::Error)
        .collect();
    assert_eq!(mismatches.len(), 1);
}

#[test]
fn camel_case_class_suggests_kebab_case() {
    let source = paste_with_styles(json!({
        "q2fy3v0": { "type": "class", "selector": ".myBlock", "css": "color: var(--base);" }
    }));

    let report = validator().validate_source(&source).unwrap();
    let casing = report
        .diagnostics()
        .iter()
        .find(|d| d.rule_id.as_str() == "bem-convention" && d.severity == Severity::Error)
        .expect("casing diagnostic");
    assert!(casing.suggestion.as_deref().unwrap().contains("my-block"));
}

#[test]
fn hyphenated_element_next_to_its_block_suggests_double_underscore() {
    let source = paste_with_styles(json!({
        "q2fy3v0": { "type": "class", "selector": ".pfx-hero", "css": "" },
        "q2fy3v1": { "type": "class", "selector": ".pfx-hero-title", "css": "" }
    }));

    let report = validator_with_prefix("pfx").validate_source(&source).unwrap();
    let hyphen = report
        .diagnostics()
        .iter()
        .find(|d| d.message.contains("pfx-hero-title"))
        .expect("hyphen diagnostic");
    assert_eq!(hyphen.severity, Severity::Warning);
    assert!(hyphen
        .suggestion
        .as_deref()
        .unwrap()
        .contains("pfx-hero__title"));
}

#[test]
fn prefixed_bem_class_is_clean() {
    let source = paste_with_styles(json!({
        "q2fy3v0": {
            "type": "class",
            "selector": ".pfx-hero__title",
            "css": "color: var(--base);"
        }
    }));

    let report = validator_with_prefix("pfx").validate_source(&source).unwrap();
    assert!(report.is_valid());
    assert!(!report.has_warnings(), "{:?}", report.diagnostics());
}

#[test]
fn hardcoded_hex_color_is_a_warning_not_an_error() {
    let source = paste_with_styles(json!({
        "q2fy3v0": {
            "type": "class",
            "selector": ".pfx-hero",
            "css": "color: #ffffff;"
        }
    }));

    let report = validator().validate_source(&source).unwrap();
    assert!(report.is_valid());
    let color = report
        .diagnostics()
        .iter()
        .find(|d| d.rule_id.as_str() == "styles" && d.message.contains("color"))
        .expect("color diagnostic");
    assert_eq!(color.severity, Severity::Warning);
}

#[test]
fn api_document_is_validated_too() {
    let source = json!({
        "name": "Hero",
        "key": "hero",
        "blocks": [{
            "blockName": "etch/element",
            "attrs": { "tag": "section" },
            "innerBlocks": [],
            "innerContent": []
        }],
        "properties": []
    })
    .to_string();

    let report = validator().validate_source(&source).unwrap();
    assert!(report.is_valid(), "{:?}", report.diagnostics());
}

#[test]
fn strict_ordering_of_rule_output() {
    // Structure findings always precede style findings for the same document.
    let source = json!({
        "type": "block",
        "version": 2,
        "gutenbergBlock": {
            "blockName": "etch/element",
            "attrs": { "tag": "div" },
            "innerBlocks": [],
            "innerContent": []
        },
        "styles": {
            "abc": { "type": "class", "selector": ".pfx-hero", "css": "color: var(--base);" }
        },
        "loops": {
            "l1": { "name": "Posts", "key": "posts", "config": { "type": "carousel" } }
        }
    })
    .to_string();

    let report = validator().validate_source(&source).unwrap();
    let rule_ids: Vec<_> = report
        .diagnostics()
        .iter()
        .map(|d| d.rule_id.as_str().to_string())
        .collect();
    let styles_pos = rule_ids.iter().position(|r| r == "styles").unwrap();
    let loops_pos = rule_ids.iter().position(|r| r == "loops").unwrap();
    assert!(styles_pos < loops_pos);
}
