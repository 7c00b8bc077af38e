use crate::artifacts::diff::diff_algorithm::{DiffGuard, diff_ops};
use crate::artifacts::diff::opcode::DiffOp;
use crate::artifacts::highlight::tokenizer::{Token, Tokenizer};
use derive_new::new;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanCategory {
    Changed,
    WhitespaceChanged,
}

/// Changed region of one side of a paired line, in character offsets.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HighlightSpan {
    side: Side,
    range: Range<usize>,
    category: SpanCategory,
}

impl HighlightSpan {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn category(&self) -> SpanCategory {
        self.category
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineHighlights {
    pub old: Vec<HighlightSpan>,
    pub new: Vec<HighlightSpan>,
}

impl LineHighlights {
    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}

/// Token-diff one paired line and merge the result into highlight spans.
pub fn highlight_pair(
    tokenizer: &Tokenizer,
    old_line: &str,
    new_line: &str,
    guard: &DiffGuard,
) -> LineHighlights {
    let old_tokens = tokenizer.tokenize(old_line);
    let new_tokens = tokenizer.tokenize(new_line);

    let old_texts = old_tokens.iter().map(Token::text).collect::<Vec<_>>();
    let new_texts = new_tokens.iter().map(Token::text).collect::<Vec<_>>();
    let ops = diff_ops(&old_texts, &new_texts, guard);

    merge_highlights(&old_tokens, &new_tokens, &ops)
}

/// Turn token opcodes into maximal highlight spans for each side.
///
/// Deletions and replacements mark old tokens, insertions and replacements
/// mark new tokens. Marked token ranges that touch on the same side, with no
/// equal token between them, become one span.
pub fn merge_highlights(
    old_tokens: &[Token],
    new_tokens: &[Token],
    ops: &[DiffOp],
) -> LineHighlights {
    let mut old_runs: Vec<Range<usize>> = Vec::new();
    let mut new_runs: Vec<Range<usize>> = Vec::new();

    for op in ops {
        match op {
            DiffOp::Equal { .. } => {}
            DiffOp::Delete { old, .. } => extend_runs(&mut old_runs, old.clone()),
            DiffOp::Insert { new, .. } => extend_runs(&mut new_runs, new.clone()),
            DiffOp::Replace { old, new } => {
                extend_runs(&mut old_runs, old.clone());
                extend_runs(&mut new_runs, new.clone());
            }
        }
    }

    LineHighlights {
        old: to_spans(Side::Old, old_tokens, &old_runs),
        new: to_spans(Side::New, new_tokens, &new_runs),
    }
}

fn extend_runs(runs: &mut Vec<Range<usize>>, range: Range<usize>) {
    if range.is_empty() {
        return;
    }

    match runs.last_mut() {
        Some(last) if last.end == range.start => last.end = range.end,
        _ => runs.push(range),
    }
}

fn to_spans(side: Side, tokens: &[Token], runs: &[Range<usize>]) -> Vec<HighlightSpan> {
    runs.iter()
        .map(|run| {
            let covered = &tokens[run.clone()];
            let category = if covered.iter().all(Token::is_whitespace) {
                SpanCategory::WhitespaceChanged
            } else {
                SpanCategory::Changed
            };

            let range = covered[0].start()..covered[covered.len() - 1].end();
            debug_assert!(!range.is_empty(), "empty highlight span on {side:?} side");

            HighlightSpan::new(side, range, category)
        })
        .collect()
}
