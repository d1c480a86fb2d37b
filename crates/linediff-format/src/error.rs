//! Error types for the formatting crate.

/// Errors that can occur while serializing or parsing a diff result.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
