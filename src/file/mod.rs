//! File entry module.
//!
//! Splits slash-separated paths into file names and extensions.

pub mod model;

pub use model::FileEntry;
