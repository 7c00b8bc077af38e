//! In-memory documents
//!
//! A `Document` is the fully loaded text of one input, split into lines. The
//! line terminator of the last line is recorded separately so that a missing
//! final newline can be reported without treating the last line as changed.

use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Line {
    index: usize,
    text: String,
}

impl Line {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    name: String,
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl Document {
    /// Split `text` into lines. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| Line::new(index, line.to_string()))
            .collect();

        Self {
            name: name.into(),
            lines,
            trailing_newline: text.ends_with('\n'),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(Line::text).collect()
    }

    /// Text of line `index`, or the empty string past the end.
    pub fn text_at(&self, index: usize) -> &str {
        self.line(index).map(Line::text).unwrap_or_default()
    }
}
