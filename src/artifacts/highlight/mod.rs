//! Intra-line highlighting
//!
//! - `tokenizer`: splits a line into word, whitespace and other tokens
//! - `span`: token-level diff of a paired line, merged into highlight spans
//!
//! Highlights are computed on whole tokens, so their boundaries always land on
//! word boundaries.

pub mod span;
pub mod tokenizer;
