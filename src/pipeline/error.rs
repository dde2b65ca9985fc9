use thiserror::Error;

use crate::artifact::ArtifactError;
use crate::config::ConfigError;
use crate::dispatch::DispatchError;
use crate::input::InputError;

/// Any failure that ends a run without an artifact.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Some chunks failed under the collect-partial policy. The mapping cannot
    /// mark missing labels, so no artifact is written.
    #[error("run incomplete: chunks {failed:?} failed to score")]
    IncompleteRun { failed: Vec<usize> },
}

impl PipelineError {
    /// Index of the first chunk that failed, if that is what ended the run.
    pub fn failed_chunk(&self) -> Option<usize> {
        self.failed_chunks().first().copied()
    }

    /// Every chunk index known to have failed, ascending.
    pub fn failed_chunks(&self) -> Vec<usize> {
        match self {
            Self::Dispatch(e) => vec![e.chunk_index()],
            Self::IncompleteRun { failed } => failed.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::Config(ConfigError::MissingCredential { .. }))
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
