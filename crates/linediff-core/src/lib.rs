//! Line-level diff engine.
//!
//! Computes a precise, typed difference between two text documents: a
//! hash-accelerated Myers shortest edit script, a reclassification pass that
//! upgrades adjacent remove/add pairs to `Modified` lines via normalized
//! Levenshtein similarity, contiguous change blocks with old/new range
//! metadata, and aggregate statistics with an overall similarity score.
//!
//! # Key Types
//!
//! - [`compute_diff`] / [`compute_diff_with`] -- The entry points
//! - [`DiffResult`] / [`DiffBlock`] / [`LineDiff`] -- The structured output
//! - [`DiffStats`] / [`EditKind`] -- Counts and classification
//! - [`DiffOptions`] / [`DiffError`] -- Tuning and the size-ceiling error
//!
//! The engine is synchronous, single-threaded, and side-effect-free; every
//! invocation allocates its own working state and nothing is shared or
//! cached across calls.

pub mod block;
pub mod edit;
pub mod engine;
pub mod error;
pub mod lines;
pub mod myers;
pub mod reclassify;
pub mod result;
pub mod similarity;

pub use block::{DiffBlock, LineDiff};
pub use edit::{Edit, EditKind};
pub use engine::{compute_diff, compute_diff_with, DiffOptions};
pub use error::DiffError;
pub use result::{DiffResult, DiffStats};
pub use similarity::similarity;
