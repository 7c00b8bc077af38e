//! Building blocks of a comparison
//!
//! - `core`: logging and pager plumbing
//! - `document`: lines of a loaded file and its trailing newline
//! - `diff`: line-level diffing and hunk grouping
//! - `highlight`: tokenizing and token-level highlight spans
//! - `render`: unified and side-by-side output

pub mod core;
pub mod diff;
pub mod document;
pub mod highlight;
pub mod render;
