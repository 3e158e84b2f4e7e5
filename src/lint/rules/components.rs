//! Component definition checks.

use crate::document::Document;
use crate::lint::diagnostic::LintDiagnostic;
use crate::lint::rule::{LintContext, LintRule, RuleId, Severity};
use crate::lint::rules::blocks::walk_block;

const RULE_ID: &str = "components";

/// Validates the `components` map of a paste document.
pub struct ComponentsRule;

impl LintRule for ComponentsRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "Components"
    }

    fn description(&self) -> &str {
        "Component identity, block trees, and property declarations"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        let Document::Paste(doc) = document else {
            return diagnostics;
        };
        let Some(components) = &doc.components else {
            return diagnostics;
        };

        for (id, component) in components {
            let id_matches = matches!(
                (id.parse::<i64>(), component.id),
                (Ok(key), Some(own)) if key == own
            );
            if !id_matches {
                diagnostics.push(error(
                    format!(
                        "Component ID mismatch: key \"{id}\" vs component.id \"{}\"",
                        component
                            .id
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "<missing>".into())
                    ),
                    id,
                ));
            }

            if component.name.is_none() || component.key.is_none() {
                diagnostics.push(error(format!("Missing name or key for component {id}"), id));
            }

            match &component.blocks {
                None => {
                    diagnostics.push(error(
                        format!("Invalid or missing blocks for component {id}"),
                        id,
                    ));
                }
                Some(blocks) if blocks.is_empty() => {
                    diagnostics.push(error(
                        format!("Component {id} has an empty blocks array"),
                        id,
                    ));
                }
                Some(blocks) => {
                    for (index, block) in blocks.iter().enumerate() {
                        walk_block(
                            block,
                            &format!("components.{id}.blocks[{index}]"),
                            &mut diagnostics,
                        );
                    }
                }
            }

            match &component.properties {
                None => {
                    diagnostics.push(
                        LintDiagnostic::new(
                            RuleId::new(RULE_ID),
                            Severity::Warning,
                            format!("Missing properties array for component {id}"),
                        )
                        .with_path(format!("components.{id}")),
                    );
                }
                Some(properties) => {
                    for (index, prop) in properties.iter().enumerate() {
                        if prop.key.is_none() || prop.name.is_none() {
                            diagnostics.push(error(
                                format!(
                                    "Missing key or name for property {index} in component {id}"
                                ),
                                id,
                            ));
                        }

                        let primitive = prop
                            .property_type
                            .as_ref()
                            .and_then(|t| t.primitive.as_ref());
                        if primitive.is_none() {
                            diagnostics.push(error(
                                format!(
                                    "Invalid type for property \"{}\" in component {id}",
                                    prop.key.as_deref().unwrap_or("<unnamed>")
                                ),
                                id,
                            ));
                        }
                    }
                }
            }
        }

        diagnostics
    }
}

fn error(message: String, id: &str) -> LintDiagnostic {
    LintDiagnostic::new(RuleId::new(RULE_ID), Severity::Error, message)
        .with_path(format!("components.{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PasteDocument;
    use serde_json::json;

    fn check(components: serde_json::Value) -> Vec<LintDiagnostic> {
        let doc: PasteDocument = serde_json::from_value(json!({
            "type": "block",
            "version": 2,
            "gutenbergBlock": { "blockName": "etch/element", "attrs": { "tag": "div" } },
            "styles": {},
            "components": components
        }))
        .unwrap();
        ComponentsRule.check(&Document::Paste(doc), &LintContext::default())
    }

    fn valid_component(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Hero",
            "key": "hero",
            "blocks": [{ "blockName": "etch/element", "attrs": { "tag": "div" } }],
            "properties": [
                { "key": "title", "name": "Title", "type": { "primitive": "string" } }
            ]
        })
    }

    #[test]
    fn valid_component_is_clean() {
        let diagnostics = check(json!({ "12": valid_component(12) }));
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
    }

    #[test]
    fn id_mismatch_is_exactly_one_error() {
        let diagnostics = check(json!({ "12": valid_component(7) }));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("mismatch"));
    }

    #[test]
    fn non_numeric_key_is_a_mismatch() {
        let diagnostics = check(json!({ "hero": valid_component(7) }));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("mismatch"));
    }

    #[test]
    fn empty_blocks_is_an_error() {
        let mut component = valid_component(12);
        component["blocks"] = json!([]);
        let diagnostics = check(json!({ "12": component }));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("empty blocks"));
    }

    #[test]
    fn component_blocks_are_walked() {
        let mut component = valid_component(12);
        component["blocks"] = json!([{ "blockName": "etch/element" }]);
        let diagnostics = check(json!({ "12": component }));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("attrs"));
        assert!(diagnostics[0]
            .path
            .as_deref()
            .unwrap()
            .contains("components.12.blocks[0]"));
    }

    #[test]
    fn missing_properties_array_is_a_warning() {
        let mut component = valid_component(12);
        component.as_object_mut().unwrap().remove("properties");
        let diagnostics = check(json!({ "12": component }));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn property_without_primitive_is_an_error() {
        let mut component = valid_component(12);
        component["properties"] = json!([{ "key": "title", "name": "Title" }]);
        let diagnostics = check(json!({ "12": component }));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Invalid type"));
    }
}
