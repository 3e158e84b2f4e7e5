//! Document shape detection.
//!
//! The shape sniff runs exactly once per validation run, before any rule
//! evaluates, so every downstream rule operates on a known variant instead
//! of re-checking scattered fields.

use serde_json::Value;

/// The recognized top-level document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Full editor-clipboard payload (`type: "block"` + `gutenbergBlock`).
    Paste,
    /// Component-creation payload (`name` + `key` + `blocks`).
    Api,
    /// Neither shape; validation stops with a single format error.
    Unknown,
}

impl DocumentKind {
    /// Classify a parsed JSON value.
    ///
    /// Priority order matters: a document that loosely satisfies both checks
    /// goes down the paste path, which is the more permissive and more common
    /// shape.
    pub fn detect(value: &Value) -> Self {
        let has_tree = value.get("gutenbergBlock").is_some();
        let has_type = value.get("type").is_some();
        let type_is_block = value.get("type").and_then(Value::as_str) == Some("block");

        if type_is_block && has_tree {
            return Self::Paste;
        }

        let looks_like_api = value.get("name").is_some()
            && value.get("key").is_some()
            && value.get("blocks").is_some_and(Value::is_array);
        if looks_like_api {
            return Self::Api;
        }

        // Best-effort fallback: any tree payload or type marker at all.
        if has_tree || has_type {
            return Self::Paste;
        }

        Self::Unknown
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paste => write!(f, "paste"),
            Self::Api => write!(f, "api"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
