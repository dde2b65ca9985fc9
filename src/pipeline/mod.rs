//! End-to-end run orchestration.

pub mod error;
pub mod runner;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{PipelineError, PipelineResult};
pub use runner::Pipeline;
pub use types::{RunSettings, RunSummary};
