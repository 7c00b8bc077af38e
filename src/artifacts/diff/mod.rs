//! Line and token diffing
//!
//! This module implements the sequence-level half of the pipeline:
//!
//! - `diff_algorithm`: Myers' diff with a work guard, used for lines and tokens
//! - `opcode`: edit scripts and the equal/delete/insert/replace opcodes
//! - `hunk`: grouping of line opcodes into hunks with context
//! - `pairing`: which replaced lines are compared token by token

pub mod diff_algorithm;
pub mod hunk;
pub mod opcode;
pub mod pairing;
