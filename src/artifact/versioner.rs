use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{ArtifactError, ArtifactResult};
use crate::constants::{ARTIFACT_EXTENSION, RUN_INFIX};

/// Returns `"{output_dir}/{prefix}-run-{run_number}.json"`.
pub fn artifact_path(output_dir: &Path, prefix: &str, run_number: u64) -> PathBuf {
    output_dir.join(artifact_file_name(prefix, run_number))
}

/// Returns `"{prefix}-run-{run_number}.json"`.
pub fn artifact_file_name(prefix: &str, run_number: u64) -> String {
    format!("{prefix}{RUN_INFIX}{run_number}.{ARTIFACT_EXTENSION}")
}

/// Extracts `N` from a file named exactly `<prefix>-run-<N>.json`.
pub fn parse_run_number(file_name: &str, prefix: &str) -> Option<u64> {
    let digits = file_name
        .strip_prefix(prefix)?
        .strip_prefix(RUN_INFIX)?
        .strip_suffix(ARTIFACT_EXTENSION)?
        .strip_suffix('.')?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// One past the highest run number among `names`, or 1 if none match.
///
/// Fails with [`ArtifactError::RunNumberExhausted`] if the highest number is
/// `u64::MAX`, since reusing it would overwrite that artifact.
pub fn next_run_number_from_names<'a, I>(names: I, prefix: &str) -> ArtifactResult<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    match names
        .into_iter()
        .filter_map(|name| parse_run_number(name, prefix))
        .max()
    {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ArtifactError::RunNumberExhausted {
                prefix: prefix.to_string(),
            }),
    }
}

/// Computes the next unused run number for `prefix` in `output_dir`.
///
/// A missing directory counts as having no runs. The number is not reserved;
/// concurrent invocations may pick the same one.
pub async fn next_run_number(output_dir: &Path, prefix: &str) -> ArtifactResult<u64> {
    let mut dir = match tokio::fs::read_dir(output_dir).await {
        Ok(dir) => dir,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(dir = %output_dir.display(), "Output directory missing, starting at run 1");
            return Ok(1);
        }
        Err(e) if e.kind() == ErrorKind::NotADirectory => {
            return Err(ArtifactError::OutputDirUnavailable {
                path: output_dir.to_path_buf(),
            });
        }
        Err(e) => return Err(ArtifactError::io(output_dir, e)),
    };

    let mut names = Vec::new();
    while let Some(entry) = dir
        .next_entry()
        .await
        .map_err(|e| ArtifactError::io(output_dir, e))?
    {
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    let next = next_run_number_from_names(names.iter().map(String::as_str), prefix)?;
    debug!(dir = %output_dir.display(), existing = names.len(), next, "Resolved next run number");
    Ok(next)
}
