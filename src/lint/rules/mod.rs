//! Built-in lint rules.
//!
//! Each module covers one rule set; a rule set emits diagnostics at several
//! severities under its single rule id.

pub mod bem;
pub mod blocks;
pub mod components;
pub mod loops;
pub mod script;
pub mod structure;
pub mod styles;

pub use bem::BemConventionRule;
pub use blocks::{BlockTreeRule, KNOWN_BLOCK_NAMES};
pub use components::ComponentsRule;
pub use loops::{LoopsRule, VALID_LOOP_TYPES};
pub use script::ScriptPayloadRule;
pub use structure::DocumentStructureRule;
pub use styles::StylesRule;
