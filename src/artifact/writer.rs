use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::error::{ArtifactError, ArtifactResult};
use crate::aggregate::AggregatedMapping;
use crate::constants::ARTIFACT_TEMP_EXTENSION;

/// Staging path the artifact is written to before being renamed into place.
pub fn temp_path(path: &Path) -> PathBuf {
    path.with_extension(ARTIFACT_TEMP_EXTENSION)
}

/// Encodes `mapping` as a JSON object with two-space indentation.
pub fn render_artifact(mapping: &AggregatedMapping) -> ArtifactResult<String> {
    Ok(serde_json::to_string_pretty(mapping)?)
}

/// Writes `mapping` to `path`, creating the parent directory if needed.
///
/// The bytes go to a sibling `.json.tmp` file that is synced and then renamed, so
/// `path` never holds a partial artifact.
pub async fn write_artifact(path: &Path, mapping: &AggregatedMapping) -> ArtifactResult<()> {
    let body = render_artifact(mapping)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        match tokio::fs::metadata(parent).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(ArtifactError::OutputDirUnavailable {
                    path: parent.to_path_buf(),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ArtifactError::io(parent, e))?;
            }
            Err(e) => return Err(ArtifactError::io(parent, e)),
        }
    }

    let temp = temp_path(path);
    {
        let mut file = tokio::fs::File::create(&temp)
            .await
            .map_err(|e| ArtifactError::io(&temp, e))?;
        file.write_all(body.as_bytes())
            .await
            .map_err(|e| ArtifactError::io(&temp, e))?;
        file.sync_all()
            .await
            .map_err(|e| ArtifactError::io(&temp, e))?;
    }

    if let Err(e) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(ArtifactError::io(path, e));
    }

    debug!(path = %path.display(), bytes = body.len(), labels = mapping.len(), "Artifact written");
    Ok(())
}
