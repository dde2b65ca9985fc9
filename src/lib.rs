//! labelscore library crate (used by the binary and integration tests).
//!
//! Scores a list of text labels with an LLM in paced, concurrent batches and writes
//! a deduplicated, sorted `label → score` JSON object as a numbered run file.
//!
//! # Pipeline
//!
//! 1. [`load_labels`] reads the newline-delimited input.
//! 2. [`chunk`] / [`chunk_slices`] split it into batches.
//! 3. [`Dispatcher`] sends one request per batch through a [`ChunkScorer`]
//!    (normally [`LabelScorer`]), staggering starts with a [`PacingStrategy`].
//! 4. [`aggregate`] merges the per-batch records into an [`AggregatedMapping`].
//! 5. [`next_run_number`] and [`write_artifact`] persist it.
//!
//! [`Pipeline`] runs all of the above from a [`Config`].
//!
//! ## Test/Mock Support
//! [`MockCompletionClient`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod aggregate;
pub mod artifact;
pub mod chunking;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod input;
pub mod pipeline;
pub mod scoring;

pub use aggregate::{AggregatedMapping, aggregate, compare_records, sorted_records};
pub use artifact::{
    ArtifactError, ArtifactResult, artifact_path, next_run_number, next_run_number_from_names,
    write_artifact,
};
pub use chunking::{chunk, chunk_count, chunk_slices};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MODEL, DEFAULT_OUTPUT_PREFIX, DEFAULT_PACING_INTERVAL,
    DEFAULT_PACING_INTERVAL_MS,
};
pub use dispatch::{
    ChunkScorer, DispatchError, DispatchReport, DispatchResult, Dispatcher, FailurePolicy,
    FixedStagger, Immediate, PacingStrategy, ProgressCounter, millis_saturating,
};
pub use input::{InputError, load_labels, parse_labels};
pub use pipeline::{Pipeline, PipelineError, PipelineResult, RunSettings, RunSummary};
#[cfg(any(test, feature = "mock"))]
pub use scoring::MockCompletionClient;
pub use scoring::{
    CompletionClient, GenaiCompletionClient, LabelScorer, ScoreRecord, ScoredChunkResult,
    ScoringError, build_prompt, parse_response,
};
