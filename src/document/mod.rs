//! Document model and shape detection.
//!
//! Etch components travel as one of two JSON shapes: the full
//! editor-clipboard payload ("paste") and the component-creation payload
//! ("api"). [`DocumentKind::detect`] classifies a parsed value once;
//! [`Document`] is the typed result the rules operate on.

pub mod format;
pub mod model;

pub use format::DocumentKind;
pub use model::{
    ApiDocument, Block, BlockAttrs, Component, Document, Loop, LoopConfig, PasteDocument,
    Property, PropertyType, ScriptPayload, Style,
};
