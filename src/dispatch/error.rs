use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Error, Debug)]
pub enum DispatchError {
    /// Scoring of one chunk failed; the whole dispatch is void.
    #[error("scoring chunk {index} failed: {source}")]
    ChunkScoringFailed {
        /// 0-based chunk index.
        index: usize,
        #[source]
        source: ScoringError,
    },
}

impl DispatchError {
    /// Index of the chunk that failed.
    pub fn chunk_index(&self) -> usize {
        match self {
            Self::ChunkScoringFailed { index, .. } => *index,
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
