use crate::areas::comparison::Comparison;
use crate::artifacts::diff::diff_algorithm::{DiffGuard, diff_ops};
use crate::artifacts::diff::hunk::{DEFAULT_CONTEXT, HunkBuilder};
use crate::artifacts::diff::opcode::DiffOp;
use crate::artifacts::highlight::tokenizer::Tokenizer;
use crate::artifacts::render::{RenderOptions, Renderer};
use bitflags::bitflags;
use derive_new::new;
use std::io::Write;

bitflags! {
    /// What differs between the two documents; empty when they are identical.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DiffOutcome: u8 {
        const CONTENT = 0b01;
        const EOF_NEWLINE = 0b10;
    }
}

impl DiffOutcome {
    pub fn is_identical(&self) -> bool {
        self.is_empty()
    }

    /// Process exit status: 0 when identical, 1 for any difference.
    pub fn exit_code(&self) -> u8 {
        if self.is_identical() { 0 } else { 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub context: usize,
    pub render: RenderOptions,
    pub guard: DiffGuard,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT, RenderOptions::default(), DiffGuard::default())
    }
}

impl Comparison {
    pub fn diff(&self, options: &DiffOptions) -> anyhow::Result<DiffOutcome> {
        let tokenizer = Tokenizer::try_new()?;
        let old = self.old();
        let new = self.new_document();

        let ops = diff_ops(&old.texts(), &new.texts(), &options.guard);
        let hunks = HunkBuilder::new(options.context).build(&ops);

        let renderer = Renderer::new(old, new, &tokenizer, options.guard, options.render);
        let mut writer = self.writer();
        renderer.render(&hunks, &mut **writer)?;
        writer.flush()?;

        Ok(self.outcome(&ops))
    }

    fn outcome(&self, ops: &[DiffOp]) -> DiffOutcome {
        let mut outcome = DiffOutcome::empty();

        if !ops.iter().all(DiffOp::is_equal) {
            outcome |= DiffOutcome::CONTENT;
        }
        if self.old().trailing_newline() != self.new_document().trailing_newline() {
            outcome |= DiffOutcome::EOF_NEWLINE;
        }

        outcome
    }
}
