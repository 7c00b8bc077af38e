use crate::artifacts::diff::opcode::DiffOp;

/// How one changed line is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedLine {
    /// Old and new line compared token by token.
    Pair { old: usize, new: usize },
    /// Whole-line deletion, no inline highlight.
    Deleted { old: usize },
    /// Whole-line insertion, no inline highlight.
    Inserted { new: usize },
}

/// Decide which lines of a change opcode are token-diffed.
///
/// A replace of M old and K new lines pairs the first `min(M, K)` lines by
/// offset; the surplus old lines follow as deletions, then the surplus new
/// lines as insertions. Pure deletions and insertions are never paired and
/// equal runs produce nothing.
pub fn pair_lines(op: &DiffOp) -> Vec<PairedLine> {
    match op {
        DiffOp::Equal { .. } => Vec::new(),
        DiffOp::Delete { old, .. } => old
            .clone()
            .map(|old| PairedLine::Deleted { old })
            .collect(),
        DiffOp::Insert { new, .. } => new
            .clone()
            .map(|new| PairedLine::Inserted { new })
            .collect(),
        DiffOp::Replace { old, new } => {
            let paired = old.len().min(new.len());

            let pairs = old
                .clone()
                .zip(new.clone())
                .map(|(old, new)| PairedLine::Pair { old, new });
            let deleted = (old.start + paired..old.end).map(|old| PairedLine::Deleted { old });
            let inserted = (new.start + paired..new.end).map(|new| PairedLine::Inserted { new });

            pairs.chain(deleted).chain(inserted).collect()
        }
    }
}
