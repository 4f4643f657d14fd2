//! seqops - Generic higher-order operations over ordered sequences.
//!
//! Every operation takes a borrowed slice and a caller-supplied closure and
//! makes a single pass in index order:
//!
//! - **Transformations**: [`map`], [`filter`]
//! - **Search**: [`find`], [`find_ref`], [`some`], [`every`]
//! - **Iteration**: [`for_each`], [`for_each_mut`], [`reduce`]
//!
//! None of them return errors. A missing match is reported through the
//! `found` flag of [`find`], `None` from [`find_ref`], or the boolean result of
//! [`some`] and [`every`].
//!
//! # Example
//!
//! ```rust
//! use seqops::{filter, find, map, reduce, predicate::equal_to};
//!
//! let input = [99, 42, -34, 0, -23, 45, 9, 5, 7];
//!
//! assert_eq!(filter(&input, |n| *n < 0), vec![-34, -23]);
//! assert_eq!(map(&input, |n| n * n)[0], 9801);
//! assert_eq!(find(&input, equal_to(9)), (9, true));
//! assert_eq!(reduce(&input, |max: i32, n| max.max(*n), 0), 99);
//! ```

pub mod error;

// Sequence module
pub mod sequence;

// File entry module
pub mod file;

// Re-exports for convenience
pub use error::{FileError, FileResult};
pub use file::FileEntry;
pub use sequence::predicate;
pub use sequence::{every, filter, find, find_ref, for_each, for_each_mut, map, reduce, some};
