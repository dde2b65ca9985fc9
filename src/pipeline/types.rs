use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::Config;

/// Filesystem and batching settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_prefix: String,
    pub chunk_size: NonZeroUsize,
}

impl From<&Config> for RunSettings {
    fn from(config: &Config) -> Self {
        Self {
            input_path: config.input_path.clone(),
            output_dir: config.output_dir.clone(),
            output_prefix: config.output_prefix.clone(),
            chunk_size: config.chunk_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a completed run produced.
pub struct RunSummary {
    /// Run number embedded in the artifact filename.
    pub run_number: u64,
    /// Where the artifact was written.
    pub artifact_path: PathBuf,
    /// Labels read from the input (after blank-line filtering).
    pub labels: usize,
    /// Chunks dispatched.
    pub chunks: usize,
    /// Distinct labels in the artifact.
    pub distinct_labels: usize,
}
