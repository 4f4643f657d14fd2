//! Sequence operations module.
//!
//! Provides the generic higher-order operations over slices and a few
//! predicate factories to go with them.

pub mod ops;
pub mod predicate;

// Re-exports for convenience
pub use ops::{every, filter, find, find_ref, for_each, for_each_mut, map, reduce, some};
