//! Host document engine interface.
//!
//! The keyboard core never owns document storage. Everything it needs from
//! the host - the current selection, format snapshots, the line tree, and a
//! way to apply structured edits - goes through the [`Document`] trait.
//! Edits are expressed as [`Delta`] sequences of retain/insert/delete ops,
//! which the host applies atomically.

mod delta;
mod types;

pub use delta::{Delta, DeltaOp};
pub use types::{FormatScope, FormatValue, Formats, LineId, LinePosition, Range, SelectionMode};

/// The host document engine, as seen by the keyboard core.
///
/// Read methods return fresh snapshots; nothing is cached across events.
/// Mutation methods are expected to apply synchronously before returning.
pub trait Document {
    /// Current selection range (collapsed when it is a plain cursor).
    fn selection(&self) -> Range;

    /// Snapshot of the formats active over `range`, block and inline merged.
    fn formats_at(&self, range: Range) -> Formats;

    /// Whether a format name is line-scoped (block) or cursor-scoped (inline).
    fn format_scope(&self, name: &str) -> FormatScope;

    /// Apply a retain/insert/delete sequence as one atomic mutation.
    fn apply(&mut self, delta: Delta);

    /// Delete the characters covered by `range`.
    fn delete_range(&mut self, range: Range);

    /// Set a block-level format on every line intersecting `range`.
    /// A falsy value clears the format.
    fn format_line(&mut self, range: Range, name: &str, value: FormatValue);

    /// Set an inline format at the cursor. A falsy value clears it.
    fn format_cursor(&mut self, name: &str, value: FormatValue);

    /// Move the selection. [`SelectionMode::Silent`] must not re-enter the
    /// keyboard core's own event path.
    fn set_selection(&mut self, range: Range, mode: SelectionMode);

    /// Resolve a document offset to its containing line, or `None` when the
    /// offset falls outside the document.
    fn find_line(&self, offset: usize) -> Option<LinePosition>;

    /// All lines intersected by `range`, in document order.
    fn lines_in(&self, range: Range) -> Vec<LineId>;

    /// Snapshot of a single line's block formats.
    fn line_formats(&self, line: LineId) -> Formats;

    /// Set a line's indent level. Level 0 clears the indent format.
    fn set_line_indent(&mut self, line: LineId, level: u32);
}
