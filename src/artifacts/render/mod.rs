//! Diff rendering
//!
//! This module turns hunks into text:
//!
//! - `unified`: single-column layout
//! - `side_by_side`: two clipped panels per row
//! - `clip`: fitting a line into a panel without losing highlight spans
//! - `style`: the color palette and the plain-text markers used without color
//!
//! Rows are built per hunk and consumed immediately; highlight spans never
//! outlive the hunk they were computed for.

pub mod clip;
pub mod side_by_side;
pub mod style;
pub mod unified;

use crate::artifacts::diff::diff_algorithm::DiffGuard;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::diff::opcode::DiffOp;
use crate::artifacts::diff::pairing::{PairedLine, pair_lines};
use crate::artifacts::document::Document;
use crate::artifacts::highlight::span::{LineHighlights, highlight_pair};
use crate::artifacts::highlight::tokenizer::Tokenizer;
use crate::artifacts::render::side_by_side::SideBySideLayout;
use crate::artifacts::render::style::Palette;
use crate::artifacts::render::unified::UnifiedLayout;
use derive_new::new;
use std::io::Write;

pub const DEFAULT_PANEL_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Unified,
    SideBySide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RenderOptions {
    pub layout: Layout,
    pub panel_width: usize,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(Layout::Unified, DEFAULT_PANEL_WIDTH, Palette::new(false))
    }
}

/// One visual row of a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Context {
        old: usize,
        new: usize,
    },
    Deleted {
        old: usize,
    },
    Inserted {
        new: usize,
    },
    Changed {
        old: usize,
        new: usize,
        highlights: LineHighlights,
    },
}

pub trait HunkLayout {
    fn write_row(&self, row: &Row, out: &mut dyn Write) -> anyhow::Result<()>;
}

#[derive(new)]
pub struct Renderer<'d> {
    old: &'d Document,
    new: &'d Document,
    tokenizer: &'d Tokenizer,
    guard: DiffGuard,
    options: RenderOptions,
}

impl<'d> Renderer<'d> {
    /// Expand a hunk into rows, token-diffing every paired line.
    pub fn rows(&self, hunk: &Hunk) -> Vec<Row> {
        hunk.ops()
            .iter()
            .flat_map(|op| match op {
                DiffOp::Equal { old, new } => old
                    .clone()
                    .zip(new.clone())
                    .map(|(old, new)| Row::Context { old, new })
                    .collect::<Vec<_>>(),
                op => pair_lines(op)
                    .into_iter()
                    .map(|line| self.row(line))
                    .collect(),
            })
            .collect()
    }

    /// Write the whole diff: file header and hunks, or a single notice when
    /// there are no hunks to show.
    pub fn render(&self, hunks: &[Hunk], out: &mut dyn Write) -> anyhow::Result<()> {
        let palette = self.options.palette;

        if hunks.is_empty() {
            return self.render_notice(out);
        }

        let layout: Box<dyn HunkLayout + '_> = match self.options.layout {
            Layout::Unified => Box::new(UnifiedLayout::new(self.old, self.new, palette)),
            Layout::SideBySide => Box::new(SideBySideLayout::new(
                self.old,
                self.new,
                palette,
                self.options.panel_width,
            )),
        };
        log::debug!(
            "rendering {} hunk(s) with {:?} layout",
            hunks.len(),
            self.options.layout
        );

        writeln!(
            out,
            "{}",
            palette.file_header(&format!("--- {}", self.old.name()))
        )?;
        writeln!(
            out,
            "{}",
            palette.file_header(&format!("+++ {}", self.new.name()))
        )?;

        for hunk in hunks {
            writeln!(out, "{}", palette.hunk_header(&hunk.header()))?;
            for row in self.rows(hunk) {
                layout.write_row(&row, out)?;
            }
            writeln!(out)?;
        }

        if let Some(document) = self.missing_newline() {
            writeln!(
                out,
                "{}",
                palette.warning(&format!("\\ No newline at end of {}", document.name()))
            )?;
        }

        Ok(())
    }

    fn render_notice(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        let palette = self.options.palette;

        match self.missing_newline() {
            None => writeln!(out, "    {}", palette.notice("No changes detected"))?,
            Some(document) => writeln!(
                out,
                "    {}",
                palette.warning(&format!(
                    "Only difference: no newline at end of {}",
                    document.name()
                ))
            )?,
        }

        Ok(())
    }

    /// The non-empty document that lacks a final newline while the other has one.
    pub fn missing_newline(&self) -> Option<&'d Document> {
        match (self.old.trailing_newline(), self.new.trailing_newline()) {
            (true, false) if !self.new.is_empty() => Some(self.new),
            (false, true) if !self.old.is_empty() => Some(self.old),
            _ => None,
        }
    }

    fn row(&self, line: PairedLine) -> Row {
        match line {
            PairedLine::Pair { old, new } => Row::Changed {
                old,
                new,
                highlights: highlight_pair(
                    self.tokenizer,
                    self.old.text_at(old),
                    self.new.text_at(new),
                    &self.guard,
                ),
            },
            PairedLine::Deleted { old } => Row::Deleted { old },
            PairedLine::Inserted { new } => Row::Inserted { new },
        }
    }
}
