//! Stock editing-command handlers: delete, enter, format toggle, tab
//!
//! Each handler is a pure function of the current range plus the document's
//! current format state; nothing is persisted between invocations. Every
//! handler finishes with a silent selection update so the host does not
//! re-enter this core's own event path.

use crate::document::{Delta, Document, FormatScope, FormatValue, Formats, Range, SelectionMode};

use super::types::KeyEvent;

const LIST: &str = "list";
const INDENT: &str = "indent";

/// What a backspace at a collapsed cursor should do.
///
/// Kept as an explicit policy enum so the outdent-before-delete cascade for
/// list items stays auditable and independently testable.
#[derive(Debug, PartialEq, Eq)]
enum BackspacePolicy {
    /// Cursor sits at offset 0 of an indented list line: outdent one level.
    DecrementIndent(i64),
    /// Cursor sits at offset 0 of an unindented list line: back to a plain
    /// paragraph.
    ClearList,
    /// Plain character delete before the cursor.
    DeleteChar,
}

fn backspace_policy<D: Document>(doc: &D, range: Range) -> BackspacePolicy {
    let at_line_start = doc
        .find_line(range.start)
        .is_some_and(|pos| pos.offset == 0);
    if !at_line_start {
        return BackspacePolicy::DeleteChar;
    }
    let formats = doc.formats_at(range);
    if !formats.get(LIST).is_some_and(FormatValue::is_truthy) {
        return BackspacePolicy::DeleteChar;
    }
    match formats.get(INDENT).and_then(FormatValue::as_number) {
        Some(level) if level > 0 => BackspacePolicy::DecrementIndent(level),
        _ => BackspacePolicy::ClearList,
    }
}

/// Delete handler, for both Backspace (`backspace == true`) and forward
/// Delete.
///
/// A non-collapsed selection is removed whole regardless of direction.
/// Backspace at offset 0 of a list line outdents instead of deleting, one
/// step per press: indent level down to zero, then the list format itself.
pub fn on_delete<D: Document>(doc: &mut D, backspace: bool, range: Range) {
    let mut caret = range.start;
    if !range.is_collapsed() {
        doc.delete_range(range);
    } else if !backspace {
        doc.delete_range(Range::new(range.start, range.start + 1));
    } else {
        match backspace_policy(doc, range) {
            BackspacePolicy::DecrementIndent(level) => {
                doc.format_line(range, INDENT, FormatValue::Number(level - 1));
            }
            BackspacePolicy::ClearList => {
                doc.format_line(range, LIST, FormatValue::Bool(false));
            }
            BackspacePolicy::DeleteChar => {
                // Clamped at the document start: nothing before offset 0.
                if range.start > 0 {
                    doc.delete_range(Range::new(range.start - 1, range.start));
                    caret = range.start - 1;
                }
            }
        }
    }
    doc.set_selection(Range::caret(caret), SelectionMode::Silent);
}

/// Line-break handler.
///
/// Inserts a break carrying exactly the block-scoped formats active at the
/// range, collapsing any selection into it as one atomic delta. Inline
/// formats (bold and friends) must persist across the break, so each one is
/// re-applied at the new cursor afterwards; block formats already ride the
/// insert and reapplying them would double-apply.
pub fn on_enter<D: Document>(doc: &mut D, range: Range) {
    let formats = doc.formats_at(range);
    let (line_formats, inline_formats): (Formats, Formats) = formats
        .into_iter()
        .partition(|(name, _)| doc.format_scope(name) == FormatScope::Block);

    let delta = Delta::new()
        .retain(range.start)
        .insert_with("\n", line_formats)
        .delete(range.len());
    doc.apply(delta);
    doc.set_selection(Range::caret(range.start + 1), SelectionMode::Silent);

    for (name, value) in inline_formats {
        doc.format_cursor(&name, value);
    }
}

/// Inline format toggle: set `name` to the negation of its current
/// truthiness at the cursor/selection.
pub fn on_format<D: Document>(doc: &mut D, name: &str, range: Range) {
    let formats = doc.formats_at(range);
    let active = formats.get(name).is_some_and(FormatValue::is_truthy);
    doc.format_cursor(name, FormatValue::Bool(!active));
}

/// Tab handler: literal tab insertion, or list indent/outdent.
///
/// When the range spans only list lines (and is not collapsed), Tab indents
/// and Shift+Tab outdents every intersected line by one, each clamped at
/// zero against its own prior indent. Otherwise a literal tab replaces the
/// selection. Returns `false` (no-op) when no containing line resolves.
pub fn on_tab<D: Document>(doc: &mut D, range: Range, event: &KeyEvent) -> bool {
    if doc.find_line(range.start).is_none() {
        return false;
    }

    let lines = doc.lines_in(range);
    let mut indents = Vec::with_capacity(lines.len());
    let mut all_list_lines = true;
    for &line in &lines {
        let formats = doc.line_formats(line);
        indents.push(
            formats
                .get(INDENT)
                .and_then(FormatValue::as_number)
                .unwrap_or(0),
        );
        all_list_lines &= formats.get(LIST).is_some_and(FormatValue::is_truthy);
    }

    if range.is_collapsed() || !all_list_lines {
        let delta = Delta::new()
            .retain(range.start)
            .insert("\t")
            .delete(range.len());
        doc.apply(delta);
    } else {
        let modifier: i64 = if event.shift { -1 } else { 1 };
        for (&line, &indent) in lines.iter().zip(&indents) {
            doc.set_line_indent(line, (indent + modifier).max(0) as u32);
        }
    }

    doc.set_selection(Range::caret(range.start), SelectionMode::Silent);
    true
}
