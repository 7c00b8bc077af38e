//! Input side of a comparison
//!
//! - `comparison`: the old and new documents plus the output writer
//! - `workspace`: resolves paths and loads files as documents

pub mod comparison;
pub mod workspace;
