//! labelscore entrypoint.
//!
//! Configuration comes from `LABELSCORE_*` environment variables. Failures are
//! logged and the process still exits normally; no artifact is written on failure.

use anyhow::Context;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

use labelscore::{Config, Pipeline, RunSummary, millis_saturating};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_LOG_FILTER: &str = "labelscore=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(summary) => {
            tracing::info!(
                run = summary.run_number,
                path = %summary.artifact_path.display(),
                labels = summary.labels,
                distinct_labels = summary.distinct_labels,
                chunks = summary.chunks,
                "Run complete"
            );
        }
        Err(e) => {
            tracing::error!("Error during processing: {:#}", e);
        }
    }

    Ok(())
}

async fn run() -> anyhow::Result<RunSummary> {
    let config = Config::from_env().context("configuration rejected")?;

    tracing::info!(
        model = %config.model,
        chunk_size = config.chunk_size.get(),
        pacing_ms = millis_saturating(config.pacing_interval),
        policy = %config.failure_policy,
        input = %config.input_path.display(),
        output_dir = %config.output_dir.display(),
        "labelscore starting"
    );

    let pipeline = Pipeline::from_config(&config);
    let summary = pipeline.run().await.context("scoring run failed")?;
    Ok(summary)
}
