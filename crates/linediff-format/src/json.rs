//! Lossless JSON export of a diff result.

use linediff_core::DiffResult;

use crate::error::FormatError;

/// Serialize a full [`DiffResult`] as pretty-printed JSON.
pub fn export_diff_json(result: &DiffResult) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Parse a previously exported diff result back from JSON.
pub fn parse_diff_json(json: &str) -> Result<DiffResult, FormatError> {
    Ok(serde_json::from_str(json)?)
}
