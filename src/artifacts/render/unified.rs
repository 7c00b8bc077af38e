use crate::artifacts::document::Document;
use crate::artifacts::highlight::span::HighlightSpan;
use crate::artifacts::render::clip::Clip;
use crate::artifacts::render::style::{LineStyle, Palette};
use crate::artifacts::render::{HunkLayout, Row};
use derive_new::new;
use std::io::Write;

/// Single-column layout: every row is `NNNN <marker><text>`.
///
/// Equal lines carry the old line number, deletions the old and insertions
/// the new. A paired change prints its old line directly above its new line.
#[derive(Debug, Clone, Copy, new)]
pub struct UnifiedLayout<'d> {
    old: &'d Document,
    new: &'d Document,
    palette: Palette,
}

impl UnifiedLayout<'_> {
    fn write_line(
        &self,
        out: &mut dyn Write,
        number: usize,
        style: LineStyle,
        text: &str,
        spans: &[HighlightSpan],
    ) -> anyhow::Result<()> {
        let (painted, _) = self
            .palette
            .paint_line(style, text, spans, &Clip::full(text));

        writeln!(
            out,
            "{} {}{}",
            self.palette.gutter(Some(number + 1)),
            self.palette.segment(style, style.marker()),
            painted
        )?;

        Ok(())
    }
}

impl HunkLayout for UnifiedLayout<'_> {
    fn write_row(&self, row: &Row, out: &mut dyn Write) -> anyhow::Result<()> {
        match row {
            Row::Context { old, .. } => {
                self.write_line(out, *old, LineStyle::Context, self.old.text_at(*old), &[])
            }
            Row::Deleted { old } => {
                self.write_line(out, *old, LineStyle::Deleted, self.old.text_at(*old), &[])
            }
            Row::Inserted { new } => {
                self.write_line(out, *new, LineStyle::Inserted, self.new.text_at(*new), &[])
            }
            Row::Changed {
                old,
                new,
                highlights,
            } => {
                self.write_line(
                    out,
                    *old,
                    LineStyle::Deleted,
                    self.old.text_at(*old),
                    &highlights.old,
                )?;
                self.write_line(
                    out,
                    *new,
                    LineStyle::Inserted,
                    self.new.text_at(*new),
                    &highlights.new,
                )
            }
        }
    }
}
