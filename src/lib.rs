//! Vellum - keyboard input core for a structured rich-text editor
//!
//! This crate maps physical key presses to editing commands and executes
//! those commands as format-aware mutations against a host document engine.
//! The host engine, line tree, and event source are external collaborators
//! expressed through the [`Document`] trait; this crate only constructs
//! edits, it never owns document storage.

pub mod document;
pub mod keyboard;

// Re-export commonly used types
pub use document::{
    Delta, DeltaOp, Document, FormatScope, FormatValue, Formats, LineId, LinePosition, Range,
    SelectionMode,
};
pub use keyboard::{
    keys, Binding, BindingSpec, Handler, KeyEvent, KeySpec, Keyboard, Platform, TriState,
};
