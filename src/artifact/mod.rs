//! Versioned run artifacts: picking the next run number and writing the file.
//!
//! Artifacts live at `<output-dir>/<prefix>-run-<N>.json`, `N` counting up from 1.

/// Artifact error types.
pub mod error;
pub mod versioner;
pub mod writer;


pub use error::{ArtifactError, ArtifactResult};
pub use versioner::{
    artifact_file_name, artifact_path, next_run_number, next_run_number_from_names,
    parse_run_number,
};
pub use writer::{render_artifact, temp_path, write_artifact};
