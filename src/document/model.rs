//! Typed document model for Etch component JSON.
//!
//! Fields a rule inspects are `Option` so a structurally incomplete document
//! still deserializes and every missing piece is reported as a diagnostic
//! instead of a parse failure. Map-valued fields use `BTreeMap` so reports
//! are deterministic across runs.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A parsed document, one of the two recognized shapes.
#[derive(Debug, Clone)]
pub enum Document {
    /// Full editor-clipboard payload.
    Paste(PasteDocument),
    /// Component-creation payload from the Etch API.
    Api(ApiDocument),
}

/// The editor-clipboard (paste) document shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteDocument {
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub version: Option<i64>,
    pub gutenberg_block: Option<Block>,
    pub styles: Option<BTreeMap<String, Style>>,
    pub components: Option<BTreeMap<String, Component>>,
    pub loops: Option<BTreeMap<String, Loop>>,
}

/// The component-creation (API) document shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    pub name: Option<String>,
    pub key: Option<String>,
    pub blocks: Option<Vec<Block>>,
    pub properties: Option<Vec<Property>>,
    pub styles: Option<BTreeMap<String, Style>>,
}

/// One node of the content tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub block_name: Option<String>,
    pub attrs: Option<BlockAttrs>,
    pub inner_blocks: Option<Vec<Block>>,
    /// Entries are either serialized markup fragments or `null` placeholders
    /// for the corresponding `innerBlocks` children.
    pub inner_content: Option<Vec<Value>>,
}

/// Free-form block attributes with the fields the rules inspect pulled out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockAttrs {
    pub tag: Option<String>,
    #[serde(rename = "ref")]
    pub component_ref: Option<Value>,
    pub styles: Option<Vec<String>>,
    pub script: Option<ScriptPayload>,
    pub attributes: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An embedded script payload: base64-encoded UTF-8, single line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptPayload {
    pub id: Option<String>,
    pub code: Option<String>,
}

/// A named CSS rule bound to a selector, keyed by a generated id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Style {
    #[serde(rename = "type")]
    pub style_type: Option<String>,
    pub selector: Option<String>,
    pub css: Option<String>,
}

/// A reusable named bundle of blocks plus a typed property list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Component {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub key: Option<String>,
    pub blocks: Option<Vec<Block>>,
    pub properties: Option<Vec<Property>>,
}

/// A typed component property.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    pub key: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
}

/// The type descriptor of a component property.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyType {
    pub primitive: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A named data-iteration configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Loop {
    pub name: Option<String>,
    pub key: Option<String>,
    pub config: Option<LoopConfig>,
}

/// Loop data-source configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoopConfig {
    #[serde(rename = "type")]
    pub loop_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Block {
    /// Count of `null` placeholders in `innerContent`.
    pub fn inner_content_null_count(&self) -> usize {
        self.inner_content
            .as_ref()
            .map(|entries| entries.iter().filter(|v| v.is_null()).count())
            .unwrap_or(0)
    }
}
