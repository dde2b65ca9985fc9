//! Label file loading.
//!
//! The input is newline-delimited. Each line is trimmed and blank lines are dropped;
//! duplicates are kept.

pub mod error;


pub use error::{InputError, InputResult};

use std::path::Path;

use tracing::debug;

/// Reads and normalizes the label file at `path`.
pub async fn load_labels(path: &Path) -> InputResult<Vec<String>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let labels = parse_labels(&text);
    debug!(path = %path.display(), count = labels.len(), "Loaded labels");
    Ok(labels)
}

/// Splits `text` into trimmed, non-empty labels in input order.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
