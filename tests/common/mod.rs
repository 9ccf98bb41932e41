//! Shared test helpers: an in-memory document engine with a call log
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use vellum::{
    Delta, DeltaOp, Document, FormatScope, FormatValue, Formats, LineId, LinePosition, Range,
    SelectionMode,
};

/// One mutation call received from the keyboard core, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Apply(Delta),
    DeleteRange(Range),
    FormatLine {
        range: Range,
        name: String,
        value: FormatValue,
    },
    FormatCursor {
        name: String,
        value: FormatValue,
    },
    SetSelection {
        range: Range,
        mode: SelectionMode,
    },
    SetLineIndent {
        line: LineId,
        level: u32,
    },
}

/// A small real document model: text with '\n' line separators, per-line
/// block formats, and a set of inline formats active at the selection.
/// Every mutation is both applied and logged so tests can assert on either.
pub struct TestDocument {
    pub text: String,
    pub selection: Range,
    pub block_formats: Vec<Formats>,
    pub inline_formats: Formats,
    pub calls: Vec<Call>,
}

impl TestDocument {
    pub fn new(text: &str, selection: Range) -> Self {
        let line_count = text.split('\n').count();
        Self {
            text: text.to_string(),
            selection,
            block_formats: vec![Formats::new(); line_count],
            inline_formats: Formats::new(),
            calls: Vec::new(),
        }
    }

    /// Set a block format on one line (builder pattern).
    pub fn with_line_format(
        mut self,
        line: usize,
        name: &str,
        value: impl Into<FormatValue>,
    ) -> Self {
        self.block_formats[line].insert(name.to_string(), value.into());
        self
    }

    /// Mark an inline format active at the selection (builder pattern).
    pub fn with_inline_format(mut self, name: &str, value: impl Into<FormatValue>) -> Self {
        self.inline_formats.insert(name.to_string(), value.into());
        self
    }

    /// Ranges of every silent selection update, in call order.
    pub fn silent_selections(&self) -> Vec<Range> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::SetSelection {
                    range,
                    mode: SelectionMode::Silent,
                } => Some(*range),
                _ => None,
            })
            .collect()
    }

    /// Every format_cursor call, in call order.
    pub fn cursor_format_calls(&self) -> Vec<(String, FormatValue)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::FormatCursor { name, value } => Some((name.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Every applied delta, in call order.
    pub fn applied_deltas(&self) -> Vec<&Delta> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Apply(delta) => Some(delta),
                _ => None,
            })
            .collect()
    }

    /// Every set_line_indent call, in call order.
    pub fn indent_calls(&self) -> Vec<(LineId, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::SetLineIndent { line, level } => Some((*line, *level)),
                _ => None,
            })
            .collect()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn insert_text(&mut self, at: usize, text: &str) {
        let at = self.byte_index(at);
        self.text.insert_str(at, text);
    }

    fn remove_text(&mut self, range: Range) {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end);
        self.text.replace_range(start..end, "");
    }
}

impl Document for TestDocument {
    fn selection(&self) -> Range {
        self.selection
    }

    fn formats_at(&self, range: Range) -> Formats {
        let mut formats = self.inline_formats.clone();
        if let Some(pos) = self.find_line(range.start) {
            if let Some(block) = self.block_formats.get(pos.line.0) {
                formats.extend(block.clone());
            }
        }
        formats
    }

    fn format_scope(&self, name: &str) -> FormatScope {
        match name {
            "list" | "indent" | "blockquote" | "header" | "align" => FormatScope::Block,
            _ => FormatScope::Inline,
        }
    }

    fn apply(&mut self, delta: Delta) {
        self.calls.push(Call::Apply(delta.clone()));
        let mut position = 0;
        for op in delta.ops() {
            match op {
                DeltaOp::Retain(n) => position += n,
                DeltaOp::Insert { text, .. } => {
                    self.insert_text(position, text);
                    position += text.chars().count();
                }
                DeltaOp::Delete(n) => {
                    self.remove_text(Range::new(position, position + n));
                }
            }
        }
    }

    fn delete_range(&mut self, range: Range) {
        self.calls.push(Call::DeleteRange(range));
        self.remove_text(range);
    }

    fn format_line(&mut self, range: Range, name: &str, value: FormatValue) {
        self.calls.push(Call::FormatLine {
            range,
            name: name.to_string(),
            value: value.clone(),
        });
        for line in self.lines_in(range) {
            if self.block_formats.len() <= line.0 {
                self.block_formats.resize_with(line.0 + 1, Formats::new);
            }
            if value.is_truthy() {
                self.block_formats[line.0].insert(name.to_string(), value.clone());
            } else {
                self.block_formats[line.0].remove(name);
            }
        }
    }

    fn format_cursor(&mut self, name: &str, value: FormatValue) {
        self.calls.push(Call::FormatCursor {
            name: name.to_string(),
            value: value.clone(),
        });
        if value.is_truthy() {
            self.inline_formats.insert(name.to_string(), value);
        } else {
            self.inline_formats.remove(name);
        }
    }

    fn set_selection(&mut self, range: Range, mode: SelectionMode) {
        self.calls.push(Call::SetSelection { range, mode });
        self.selection = range;
    }

    fn find_line(&self, offset: usize) -> Option<LinePosition> {
        if offset > self.text.chars().count() {
            return None;
        }
        let mut line_start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if offset <= line_start + len {
                return Some(LinePosition {
                    line: LineId(index),
                    offset: offset - line_start,
                });
            }
            line_start += len + 1;
        }
        None
    }

    fn lines_in(&self, range: Range) -> Vec<LineId> {
        let mut lines = Vec::new();
        let mut line_start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            let line_end = line_start + line.chars().count();
            if line_start <= range.end && range.start <= line_end {
                lines.push(LineId(index));
            }
            line_start = line_end + 1;
        }
        lines
    }

    fn line_formats(&self, line: LineId) -> Formats {
        self.block_formats.get(line.0).cloned().unwrap_or_default()
    }

    fn set_line_indent(&mut self, line: LineId, level: u32) {
        self.calls.push(Call::SetLineIndent { line, level });
        if self.block_formats.len() <= line.0 {
            self.block_formats.resize_with(line.0 + 1, Formats::new);
        }
        if level == 0 {
            self.block_formats[line.0].remove("indent");
        } else {
            self.block_formats[line.0]
                .insert("indent".to_string(), FormatValue::Number(level as i64));
        }
    }
}
