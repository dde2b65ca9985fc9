//! Per-chunk scoring: prompt rendering, the completion backend, and reply parsing.
//!
//! [`LabelScorer`] is the piece the dispatcher drives. It renders the prompt for a
//! chunk, sends it through a [`CompletionClient`], and parses the reply with
//! [`parse_response`]. Any failure along the way surfaces as a [`ScoringError`];
//! nothing here retries.

pub mod client;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod scorer;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use client::{CompletionClient, GenaiCompletionClient};
pub use error::ScoringError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletionClient;
pub use parser::{parse_response, strip_fences};
pub use prompt::build_prompt;
pub use scorer::LabelScorer;
pub use types::{ScoreRecord, ScoredChunkResult};
