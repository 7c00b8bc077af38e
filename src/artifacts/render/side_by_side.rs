use crate::artifacts::document::Document;
use crate::artifacts::highlight::span::HighlightSpan;
use crate::artifacts::render::clip::Clip;
use crate::artifacts::render::style::{LineStyle, Palette, gutter_width};
use crate::artifacts::render::{HunkLayout, Row};
use derive_new::new;
use std::io::Write;

pub const MIN_PANEL_WIDTH: usize = 12;

struct Cell<'a> {
    number: usize,
    style: LineStyle,
    text: &'a str,
    spans: &'a [HighlightSpan],
}

/// Two panels per row, old on the left and new on the right.
///
/// Each panel is clipped to `panel_width` columns. Rows that exist on one
/// side only leave the other panel blank.
#[derive(Debug, Clone, Copy, new)]
pub struct SideBySideLayout<'d> {
    old: &'d Document,
    new: &'d Document,
    palette: Palette,
    panel_width: usize,
}

impl SideBySideLayout<'_> {
    fn panel(&self, cell: Option<Cell<'_>>, pad: bool) -> String {
        let Some(cell) = cell else {
            return if pad {
                " ".repeat(self.panel_width)
            } else {
                String::new()
            };
        };

        let number = Some(cell.number + 1);
        // gutter, its trailing space and the marker
        let prefix = gutter_width(number) + 2;

        // one column per character keeps span offsets valid
        let text = cell.text.replace('\t', " ");
        let overhead = self.palette.highlight_overhead();
        let clip = Clip::fit_spans(
            &text,
            self.panel_width.saturating_sub(prefix),
            cell.spans,
            overhead,
        );
        let (painted, shown) = self
            .palette
            .paint_line(cell.style, &text, cell.spans, &clip);

        let used = prefix + clip.display_width() + overhead * shown;
        let padding = if pad {
            " ".repeat(self.panel_width.saturating_sub(used))
        } else {
            String::new()
        };

        format!(
            "{} {}{}{}",
            self.palette.gutter(number),
            self.palette.segment(cell.style, cell.style.marker()),
            painted,
            padding
        )
    }

    fn old_cell<'a>(
        &'a self,
        index: usize,
        style: LineStyle,
        spans: &'a [HighlightSpan],
    ) -> Cell<'a> {
        Cell {
            number: index,
            style,
            text: self.old.text_at(index),
            spans,
        }
    }

    fn new_cell<'a>(
        &'a self,
        index: usize,
        style: LineStyle,
        spans: &'a [HighlightSpan],
    ) -> Cell<'a> {
        Cell {
            number: index,
            style,
            text: self.new.text_at(index),
            spans,
        }
    }
}

impl HunkLayout for SideBySideLayout<'_> {
    fn write_row(&self, row: &Row, out: &mut dyn Write) -> anyhow::Result<()> {
        let (left, right) = match row {
            Row::Context { old, new } => (
                Some(self.old_cell(*old, LineStyle::Context, &[])),
                Some(self.new_cell(*new, LineStyle::Context, &[])),
            ),
            Row::Deleted { old } => (Some(self.old_cell(*old, LineStyle::Deleted, &[])), None),
            Row::Inserted { new } => (None, Some(self.new_cell(*new, LineStyle::Inserted, &[]))),
            Row::Changed {
                old,
                new,
                highlights,
            } => (
                Some(self.old_cell(*old, LineStyle::Deleted, &highlights.old)),
                Some(self.new_cell(*new, LineStyle::Inserted, &highlights.new)),
            ),
        };

        let right = self.panel(right, false);
        let separator = self.palette.separator();
        let separator = if right.is_empty() {
            separator.trim_end()
        } else {
            separator.as_str()
        };

        writeln!(out, "{}{}{}", self.panel(left, true), separator, right)?;

        Ok(())
    }
}
