//! Project configuration.

pub mod project;

pub use project::{
    derive_acss_url, resolve_prefix, validate_prefix, ProjectConfig, StyleGuide,
    PROJECT_CONFIG_FILE,
};
