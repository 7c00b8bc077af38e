//! Terminal styling of rendered rows
//!
//! The palette is the only place that knows about colors. With color turned
//! off, highlight spans stay visible through word-diff markers: `[-…-]` for
//! old text and `{+…+}` for new text.

use crate::artifacts::highlight::span::{HighlightSpan, Side, SpanCategory};
use crate::artifacts::render::clip::{Clip, ELLIPSIS};
use colored::{ColoredString, Colorize};
use derive_new::new;

pub const GUTTER_WIDTH: usize = 4;

/// Number of extra columns the plain markers add around one span.
const MARKER_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Context,
    Deleted,
    Inserted,
}

impl LineStyle {
    pub fn marker(&self) -> &'static str {
        match self {
            LineStyle::Context => " ",
            LineStyle::Deleted => "-",
            LineStyle::Inserted => "+",
        }
    }
}

/// Columns taken by the gutter for `number`; wider numbers push past `GUTTER_WIDTH`.
pub fn gutter_width(number: Option<usize>) -> usize {
    number.map_or(GUTTER_WIDTH, |number| {
        number.to_string().len().max(GUTTER_WIDTH)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn file_header(&self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }

    pub fn hunk_header(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }

    pub fn notice(&self, text: &str) -> String {
        self.paint(text, |s| s.blue())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    pub fn separator(&self) -> String {
        format!(" {} ", self.paint("│", |s| s.bright_black()))
    }

    /// Right-aligned line number, or blank columns when there is none.
    pub fn gutter(&self, number: Option<usize>) -> String {
        match number {
            Some(number) => {
                let text = format!("{number:>width$}", width = GUTTER_WIDTH);
                self.paint(&text, |s| s.bright_black())
            }
            None => " ".repeat(GUTTER_WIDTH),
        }
    }

    /// Columns added by one rendered highlight span.
    pub fn highlight_overhead(&self) -> usize {
        if self.color { 0 } else { MARKER_WIDTH }
    }

    /// Unhighlighted part of a line in its full-line style.
    pub fn segment(&self, style: LineStyle, text: &str) -> String {
        match style {
            LineStyle::Context => text.to_string(),
            LineStyle::Deleted => self.paint(text, |s| s.on_truecolor(95, 135, 175).white()),
            LineStyle::Inserted => self.paint(text, |s| s.on_truecolor(95, 135, 95).white()),
        }
    }

    pub fn highlight(&self, side: Side, category: SpanCategory, text: &str) -> String {
        if !self.color {
            return match side {
                Side::Old => format!("[-{text}-]"),
                Side::New => format!("{{+{text}+}}"),
            };
        }

        match (side, category) {
            (Side::Old, SpanCategory::Changed) => {
                self.paint(text, |s| s.on_truecolor(95, 175, 215).white())
            }
            (Side::New, SpanCategory::Changed) => {
                self.paint(text, |s| s.on_truecolor(0, 175, 135).white())
            }
            (Side::Old, SpanCategory::WhitespaceChanged) => self.paint(text, |s| s.on_red()),
            (Side::New, SpanCategory::WhitespaceChanged) => self.paint(text, |s| s.on_green()),
        }
    }

    /// Render the visible part of a line with its highlight spans applied.
    ///
    /// Returns the painted text and the number of spans that made it past the
    /// clip point.
    pub fn paint_line(
        &self,
        style: LineStyle,
        text: &str,
        spans: &[HighlightSpan],
        clip: &Clip,
    ) -> (String, usize) {
        let chars = text.chars().collect::<Vec<_>>();
        let take = |from: usize, to: usize| chars[from..to].iter().collect::<String>();

        let mut painted = String::new();
        let mut cursor = 0;
        let mut shown = 0;

        for span in spans {
            let Some(range) = clip.visible(span) else {
                break;
            };
            debug_assert!(range.start >= cursor, "overlapping highlight spans");

            painted.push_str(&self.segment(style, &take(cursor, range.start)));
            painted.push_str(&self.highlight(
                span.side(),
                span.category(),
                &take(range.start, range.end),
            ));
            cursor = range.end;
            shown += 1;
        }

        painted.push_str(&self.segment(style, &take(cursor, clip.chars)));
        if clip.truncated {
            painted.push_str(&self.segment(style, ELLIPSIS));
        }

        (painted, shown)
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color && !text.is_empty() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}
