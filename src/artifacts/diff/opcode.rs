use std::ops::Range;

/// Single step of an edit script, addressing elements by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Delete { old: usize },
    Insert { new: usize },
    Equal { old: usize, new: usize },
}

impl Edit {
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }
}

/// Opcode over two sequences, carrying only index ranges.
///
/// `Delete` has an empty `new` range positioned where the removed elements
/// would have been, `Insert` an empty `old` range. Consecutive opcodes tile
/// both sequences without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    Equal {
        old: Range<usize>,
        new: Range<usize>,
    },
    Delete {
        old: Range<usize>,
        new: Range<usize>,
    },
    Insert {
        old: Range<usize>,
        new: Range<usize>,
    },
    Replace {
        old: Range<usize>,
        new: Range<usize>,
    },
}

impl DiffOp {
    /// Classify a non-equal region by which of its sides is empty.
    pub fn change(old: Range<usize>, new: Range<usize>) -> Self {
        match (old.is_empty(), new.is_empty()) {
            (false, true) => DiffOp::Delete { old, new },
            (true, false) => DiffOp::Insert { old, new },
            _ => DiffOp::Replace { old, new },
        }
    }

    pub fn old_range(&self) -> Range<usize> {
        match self {
            DiffOp::Equal { old, .. }
            | DiffOp::Delete { old, .. }
            | DiffOp::Insert { old, .. }
            | DiffOp::Replace { old, .. } => old.clone(),
        }
    }

    pub fn new_range(&self) -> Range<usize> {
        match self {
            DiffOp::Equal { new, .. }
            | DiffOp::Delete { new, .. }
            | DiffOp::Insert { new, .. }
            | DiffOp::Replace { new, .. } => new.clone(),
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, DiffOp::Equal { .. })
    }
}

/// Collapse an edit script into opcodes.
///
/// Every run of deletions and insertions found between two equal runs becomes
/// one opcode, so a mixed run is reported as a single `Replace`.
pub fn group_edits(edits: &[Edit]) -> Vec<DiffOp> {
    let mut ops = Vec::new();
    let (mut old_pos, mut new_pos) = (0, 0);
    let mut edits = edits.iter().peekable();

    while let Some(first) = edits.peek().copied() {
        let (old_start, new_start) = (old_pos, new_pos);

        if first.is_equal() {
            while edits.next_if(|edit| edit.is_equal()).is_some() {
                old_pos += 1;
                new_pos += 1;
            }
            ops.push(DiffOp::Equal {
                old: old_start..old_pos,
                new: new_start..new_pos,
            });
        } else {
            while let Some(edit) = edits.next_if(|edit| !edit.is_equal()) {
                match edit {
                    Edit::Delete { .. } => old_pos += 1,
                    Edit::Insert { .. } => new_pos += 1,
                    Edit::Equal { .. } => {}
                }
            }
            ops.push(DiffOp::change(old_start..old_pos, new_start..new_pos));
        }
    }

    ops
}
