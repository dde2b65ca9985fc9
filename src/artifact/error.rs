use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors from listing or writing run artifacts.
pub enum ArtifactError {
    /// IO error.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mapping could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An existing artifact already uses the largest representable run number.
    #[error("no run number left for prefix '{prefix}'")]
    RunNumberExhausted {
        /// Artifact filename prefix.
        prefix: String,
    },

    /// Output path exists but is not a directory.
    #[error("output directory unavailable: {path}")]
    OutputDirUnavailable {
        /// Offending path.
        path: PathBuf,
    },
}

impl ArtifactError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
