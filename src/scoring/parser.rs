//! Model reply parsing.

use super::error::ScoringError;
use super::types::ScoreRecord;

const FENCE_JSON: &str = "```json";
const FENCE: &str = "```";

/// Parses a raw model reply into score records.
///
/// Every "```json" and "```" marker is removed before decoding, so fenced and bare
/// replies parse identically. Scores are passed through as-is.
pub fn parse_response(raw: &str) -> Result<Vec<ScoreRecord>, ScoringError> {
    let cleaned = strip_fences(raw);

    serde_json::from_str::<Vec<ScoreRecord>>(cleaned.trim())
        .map_err(|e| ScoringError::malformed(e.to_string(), raw))
}

/// Removes markdown code fence markers anywhere in `raw`.
pub fn strip_fences(raw: &str) -> String {
    raw.replace(FENCE_JSON, "").replace(FENCE, "")
}
