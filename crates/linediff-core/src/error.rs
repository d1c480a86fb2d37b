//! Error types for the diff engine.

/// Errors that can occur when diffing with an explicit resource budget.
///
/// The budget-free [`compute_diff`](crate::compute_diff) entry point is
/// total and never returns these.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An input document exceeded the configured line ceiling.
    #[error("input of {lines} lines exceeds the configured limit of {limit}")]
    InputTooLarge { lines: usize, limit: usize },
}
