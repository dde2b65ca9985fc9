//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the credential variables is set to a non-blank value.
    ///
    /// Detected before any input is read or any request is dispatched.
    #[error("missing scoring API key: set one of {}", names.join(", "))]
    MissingCredential { names: &'static [&'static str] },

    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Chunk size must be at least one.
    #[error("invalid chunk size '{value}': must be a positive integer")]
    InvalidChunkSize { value: String },

    /// Failure policy was neither `abort` nor `partial`.
    #[error("invalid failure policy '{value}': expected 'abort' or 'partial'")]
    InvalidFailurePolicy { value: String },
}
