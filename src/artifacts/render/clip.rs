use crate::artifacts::highlight::span::HighlightSpan;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

pub const ELLIPSIS: &str = "…";

/// Visible prefix of a line after fitting it into a number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    /// Characters kept from the start of the line.
    pub chars: usize,
    /// Columns taken by the kept characters.
    pub width: usize,
    /// An ellipsis follows the kept characters.
    pub truncated: bool,
}

impl Clip {
    pub fn full(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            width: text.chars().map(char_width).sum(),
            truncated: false,
        }
    }

    /// Keep as many characters as fit in `max_width` columns, reserving one
    /// column for the ellipsis when the line does not fit.
    pub fn to_width(text: &str, max_width: usize) -> Self {
        let full = Self::full(text);
        if full.width <= max_width {
            return full;
        }

        let budget = max_width.saturating_sub(1);
        let (mut chars, mut width) = (0, 0);
        for w in text.chars().map(char_width) {
            if width + w > budget {
                break;
            }
            width += w;
            chars += 1;
        }

        Self {
            chars,
            width,
            truncated: true,
        }
    }

    /// Fit a line whose visible spans each add `overhead` columns of markers.
    ///
    /// Starts with room reserved for every span and gives reservations back
    /// one at a time, as long as the spans left visible still have room.
    pub fn fit_spans(
        text: &str,
        max_width: usize,
        spans: &[HighlightSpan],
        overhead: usize,
    ) -> Self {
        let fit = |reserved: usize| {
            Self::to_width(text, max_width.saturating_sub(overhead * reserved))
        };

        let mut reserved = spans.len();
        let mut clip = fit(reserved);
        while overhead > 0 && reserved > 0 {
            let candidate = fit(reserved - 1);
            if candidate.visible_count(spans) > reserved - 1 {
                break;
            }
            reserved -= 1;
            clip = candidate;
        }

        clip
    }

    pub fn display_width(&self) -> usize {
        self.width + usize::from(self.truncated)
    }

    fn visible_count(&self, spans: &[HighlightSpan]) -> usize {
        spans
            .iter()
            .filter(|span| self.visible(span).is_some())
            .count()
    }

    /// Part of `span` that is still visible; spans starting at or after the
    /// clip point are dropped, spans crossing it are cut.
    pub fn visible(&self, span: &HighlightSpan) -> Option<Range<usize>> {
        let range = span.range();
        (range.start < self.chars).then(|| range.start..range.end.min(self.chars))
    }
}

/// Terminal columns of `c`; control characters such as tab count as one.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(1)
}
