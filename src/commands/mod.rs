//! Command implementations
//!
//! - `diff`: compare the two documents of a `Comparison` and write the result
//!
//! Commands are methods on the area they operate on and report what they found
//! rather than exiting the process themselves.

pub mod diff;
