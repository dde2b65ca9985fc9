//! Cross-cutting, shared constants.
//!
//! Defaults here are what [`Config`](crate::config::Config) falls back to when the
//! matching `LABELSCORE_*` environment variable is unset.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Maximum number of labels sent in a single scoring request.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Delay between the start of consecutive chunk requests, in milliseconds.
pub const DEFAULT_PACING_INTERVAL_MS: u64 = 4000;

pub const DEFAULT_PACING_INTERVAL: Duration = Duration::from_millis(DEFAULT_PACING_INTERVAL_MS);

/// Model used when `LABELSCORE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub const DEFAULT_INPUT_PATH: &str = "../raw-data/extracted_labels.txt";

pub const DEFAULT_OUTPUT_DIR: &str = "./ai-generated-scores";

/// Artifact filename prefix; files are named `<prefix>-run-<N>.json`.
pub const DEFAULT_OUTPUT_PREFIX: &str = "manufacturing-scores";

/// Infix between the prefix and the run number in artifact filenames.
pub const RUN_INFIX: &str = "-run-";

pub const ARTIFACT_EXTENSION: &str = "json";

/// Extension of the staging file an artifact is written to before the final rename.
pub const ARTIFACT_TEMP_EXTENSION: &str = "json.tmp";
