//! Document validation and linting.
//!
//! This module provides component document validation through a pluggable
//! rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual rule sets ([`LintRule`] trait)
//! - **Registry** - All rules in execution order ([`RuleRegistry`])
//! - **Engine** - Parse, detect, dispatch ([`Validator`])
//! - **Diagnostics** - Issue reports with severity, path, and suggestions
//!   ([`LintDiagnostic`], collected into a [`LintReport`])
//!
//! # Example
//!
//! ```
//! use etchkit::lint::{LintContext, Validator};
//!
//! let validator = Validator::new(LintContext::default());
//! let report = validator
//!     .validate_source(r#"{ "type": "block" }"#)
//!     .unwrap();
//!
//! // Missing gutenbergBlock and version
//! assert!(!report.is_valid());
//! assert_eq!(report.error_count(), 2);
//! ```

pub mod diagnostic;
pub mod engine;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;

pub use diagnostic::LintDiagnostic;
pub use engine::Validator;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use report::LintReport;
pub use rule::{LintContext, LintRule, RuleId, Severity};
pub use rules::{
    BemConventionRule, BlockTreeRule, ComponentsRule, DocumentStructureRule, LoopsRule,
    ScriptPayloadRule, StylesRule,
};
