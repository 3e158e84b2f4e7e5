//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them. Rules run
//! in registration order so reports are stable across runs.

use super::rule::{LintRule, RuleId};
use super::rules::{
    BemConventionRule, BlockTreeRule, ComponentsRule, DocumentStructureRule, LoopsRule,
    ScriptPayloadRule, StylesRule,
};

/// Registry of all available lint rules, in execution order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules in their standard order:
    /// document structure first, then the block tree and its payloads, then
    /// the style sheet, then the component and loop definitions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DocumentStructureRule));
        registry.register(Box::new(BlockTreeRule));
        registry.register(Box::new(ScriptPayloadRule));
        registry.register(Box::new(StylesRule));
        registry.register(Box::new(BemConventionRule));
        registry.register(Box::new(ComponentsRule));
        registry.register(Box::new(LoopsRule));
        registry
    }

    /// Register a lint rule at the end of the execution order.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| r.id() == *id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::lint::{LintContext, LintDiagnostic, Severity};

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _document: &Document, _ctx: &LintContext) -> Vec<LintDiagnostic> {
            vec![]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert_eq!(registry.len(), 1);
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("missing")).is_none());
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("first"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("second"),
        }));

        let ids: Vec<_> = registry.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn builtins_run_structure_first() {
        let registry = RuleRegistry::with_builtins();
        assert!(!registry.is_empty());
        assert_eq!(
            registry.iter().next().unwrap().id(),
            RuleId::new("document-structure")
        );
    }
}
