use crate::artifacts::diff::opcode::DiffOp;
use derive_new::new;
use std::ops::Range;

pub const DEFAULT_CONTEXT: usize = 3;

/// Cluster of line opcodes rendered as one unit.
///
/// Holds index ranges only; the first and last opcodes are the (possibly
/// truncated) equal runs used as context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    ops: Vec<DiffOp>,
}

impl Hunk {
    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    pub fn old_range(&self) -> Range<usize> {
        self.span(DiffOp::old_range)
    }

    pub fn new_range(&self) -> Range<usize> {
        self.span(DiffOp::new_range)
    }

    /// Old-side lines of unchanged context before the first change.
    pub fn leading_context(&self) -> Range<usize> {
        match self.ops.first() {
            Some(op @ DiffOp::Equal { .. }) => op.old_range(),
            _ => self.old_range().start..self.old_range().start,
        }
    }

    /// Old-side lines of unchanged context after the last change.
    pub fn trailing_context(&self) -> Range<usize> {
        match self.ops.last() {
            Some(op @ DiffOp::Equal { .. }) => op.old_range(),
            _ => self.old_range().end..self.old_range().end,
        }
    }

    /// `@@ -a,b +c,d @@`, 1-based; an empty side names the line before it.
    pub fn header(&self) -> String {
        fn offset(range: Range<usize>) -> String {
            let start = if range.is_empty() {
                range.start
            } else {
                range.start + 1
            };
            format!("{},{}", start, range.len())
        }

        format!(
            "@@ -{} +{} @@",
            offset(self.old_range()),
            offset(self.new_range())
        )
    }

    fn span(&self, range: fn(&DiffOp) -> Range<usize>) -> Range<usize> {
        match (self.ops.first(), self.ops.last()) {
            (Some(first), Some(last)) => range(first).start..range(last).end,
            _ => 0..0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct HunkBuilder {
    context: usize,
}

impl Default for HunkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT)
    }
}

impl HunkBuilder {
    /// Group line opcodes into hunks with `context` lines around each change.
    ///
    /// An equal run longer than twice the context splits two hunks; shorter
    /// runs keep their neighbours in the same hunk. Context never extends past
    /// either end of the documents.
    pub fn build(&self, ops: &[DiffOp]) -> Vec<Hunk> {
        if ops.iter().all(DiffOp::is_equal) {
            return Vec::new();
        }

        let n = self.context;
        let mut ops = ops.to_vec();

        if let Some(DiffOp::Equal { old, new }) = ops.first_mut() {
            old.start = old.start.max(old.end.saturating_sub(n));
            new.start = new.start.max(new.end.saturating_sub(n));
        }
        if let Some(DiffOp::Equal { old, new }) = ops.last_mut() {
            old.end = old.end.min(old.start.saturating_add(n));
            new.end = new.end.min(new.start.saturating_add(n));
        }

        let mut hunks = Vec::new();
        let mut group = Vec::new();

        for op in ops {
            match op {
                DiffOp::Equal { old, new } if old.len() > n.saturating_mul(2) => {
                    group.push(DiffOp::Equal {
                        old: old.start..old.start + n,
                        new: new.start..new.start + n,
                    });
                    hunks.push(Self::close(std::mem::take(&mut group)));
                    group.push(DiffOp::Equal {
                        old: old.end - n..old.end,
                        new: new.end - n..new.end,
                    });
                }
                op => group.push(op),
            }
        }

        if !group.iter().all(DiffOp::is_equal) {
            hunks.push(Self::close(group));
        }

        log::debug!("built {} hunk(s) with {} context line(s)", hunks.len(), n);
        hunks
    }

    fn close(group: Vec<DiffOp>) -> Hunk {
        let ops = group
            .into_iter()
            .filter(|op| !(op.is_equal() && op.old_range().is_empty()))
            .collect();
        Hunk { ops }
    }
}
