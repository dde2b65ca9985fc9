use std::sync::Arc;

use tracing::{info, warn};

use super::error::{PipelineError, PipelineResult};
use super::types::{RunSettings, RunSummary};
use crate::aggregate::aggregate;
use crate::artifact::{artifact_path, next_run_number, write_artifact};
use crate::chunking::chunk_slices;
use crate::config::Config;
use crate::dispatch::{ChunkScorer, Dispatcher, FixedStagger, PacingStrategy};
use crate::input::load_labels;
use crate::scoring::{GenaiCompletionClient, LabelScorer};

/// One end-to-end scoring run: load → chunk → dispatch → aggregate → write.
#[derive(Debug)]
pub struct Pipeline<S, P = FixedStagger> {
    settings: RunSettings,
    scorer: S,
    dispatcher: Dispatcher<P>,
}

impl Pipeline<LabelScorer<GenaiCompletionClient>, FixedStagger> {
    /// Builds the production pipeline: genai-backed scorer, fixed stagger pacing.
    pub fn from_config(config: &Config) -> Self {
        let client = GenaiCompletionClient::new(config.api_key.clone(), config.model.clone());
        let dispatcher = Dispatcher::new(FixedStagger::new(config.pacing_interval))
            .with_policy(config.failure_policy);

        Self::new(
            RunSettings::from(config),
            LabelScorer::new(Arc::new(client)),
            dispatcher,
        )
    }
}

impl<S, P> Pipeline<S, P>
where
    S: ChunkScorer,
    P: PacingStrategy,
{
    pub fn new(settings: RunSettings, scorer: S, dispatcher: Dispatcher<P>) -> Self {
        Self {
            settings,
            scorer,
            dispatcher,
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    pub fn dispatcher(&self) -> &Dispatcher<P> {
        &self.dispatcher
    }

    /// Runs the pipeline once.
    ///
    /// The artifact is written only after every stage before it succeeded and every
    /// chunk was scored; on error nothing is written.
    pub async fn run(&self) -> PipelineResult<RunSummary> {
        let settings = &self.settings;

        let run_number = next_run_number(&settings.output_dir, &settings.output_prefix).await?;
        let path = artifact_path(&settings.output_dir, &settings.output_prefix, run_number);
        info!(path = %path.display(), run = run_number, "Output file path");

        let labels = load_labels(&settings.input_path).await?;
        info!(total = labels.len(), "Total labels");

        let chunks = chunk_slices(&labels, settings.chunk_size);
        let report = self.dispatcher.dispatch(&chunks, &self.scorer).await?;

        let failed = report.failed_indices();
        if !failed.is_empty() {
            warn!(failed = ?failed, "Chunks failed; no artifact written");
            return Err(PipelineError::IncompleteRun { failed });
        }

        let mapping = aggregate(report.into_results());
        write_artifact(&path, &mapping).await?;
        info!(
            path = %path.display(),
            distinct_labels = mapping.len(),
            "Scores saved"
        );

        Ok(RunSummary {
            run_number,
            artifact_path: path,
            labels: labels.len(),
            chunks: chunks.len(),
            distinct_labels: mapping.len(),
        })
    }
}
