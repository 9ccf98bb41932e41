//! Core value types shared with the host engine: Range, formats, line refs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A selection or cursor position in document-offset coordinates.
///
/// `start <= end` always holds; a collapsed range is a plain cursor.
/// Ranges are ephemeral - fetched once per dispatch and never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a range, reordering the endpoints if needed.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed range (plain cursor) at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether this is a plain cursor rather than a span.
    pub const fn is_collapsed(self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.is_collapsed()
    }
}

/// Value of a single format attribute.
///
/// Hosts use booleans for toggles (bold), numbers for leveled formats
/// (indent, heading), and text for enumerated ones (list: "bullet").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FormatValue {
    /// Truthiness rule shared with the host: `false`, `0`, and the empty
    /// string clear a format rather than set it.
    pub fn is_truthy(&self) -> bool {
        match self {
            FormatValue::Bool(b) => *b,
            FormatValue::Number(n) => *n != 0,
            FormatValue::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric view, for leveled formats like indent.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FormatValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for FormatValue {
    fn from(b: bool) -> Self {
        FormatValue::Bool(b)
    }
}

impl From<i64> for FormatValue {
    fn from(n: i64) -> Self {
        FormatValue::Number(n)
    }
}

impl From<&str> for FormatValue {
    fn from(s: &str) -> Self {
        FormatValue::Text(s.to_string())
    }
}

/// A format snapshot: format name to value. Absent keys mean the format is
/// not active. Ordered so that iteration (and re-application) is stable.
pub type Formats = BTreeMap<String, FormatValue>;

/// Semantic scope of a format attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatScope {
    /// Applies to a whole structural line (list, block quote, heading).
    Block,
    /// Applies to a character run (bold, italic).
    Inline,
}

/// Host-owned opaque line index into the line/block tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub usize);

/// A resolved document offset: the containing line and the offset within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePosition {
    pub line: LineId,
    /// Offset from the start of the line, 0 at the line's first character.
    pub offset: usize,
}

/// How a selection update was initiated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Normal update; the host may notify listeners, including this core.
    User,
    /// Update that must not re-trigger this core's own event reaction.
    Silent,
}
