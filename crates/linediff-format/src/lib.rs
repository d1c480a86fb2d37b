//! Renderers for diff results.
//!
//! Turns a [`linediff_core::DiffResult`] into either unified patch text or
//! a lossless JSON snapshot suitable for round-tripping.
//!
//! # Key Functions
//!
//! - [`generate_unified_diff`] -- Patch-format text with context windowing
//! - [`export_diff_json`] / [`parse_diff_json`] -- Structured export

pub mod error;
pub mod json;
pub mod unified;

pub use error::FormatError;
pub use json::{export_diff_json, parse_diff_json};
pub use unified::generate_unified_diff;
