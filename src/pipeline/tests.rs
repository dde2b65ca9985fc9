use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use super::*;
use crate::config::{Config, ConfigError};
use crate::dispatch::{Dispatcher, FailurePolicy, FixedStagger, Immediate};
use crate::scoring::{LabelScorer, MockCompletionClient};

fn settings(dir: &Path, chunk_size: usize) -> RunSettings {
    RunSettings {
        input_path: dir.join("labels.txt"),
        output_dir: dir.join("scores"),
        output_prefix: "manufacturing-scores".to_string(),
        chunk_size: NonZeroUsize::new(chunk_size).expect("non-zero"),
    }
}

async fn write_input(dir: &Path, contents: &str) {
    tokio::fs::write(dir.join("labels.txt"), contents)
        .await
        .expect("write input");
}

fn pipeline(
    settings: RunSettings,
    client: MockCompletionClient,
) -> Pipeline<LabelScorer<MockCompletionClient>, Immediate> {
    Pipeline::new(
        settings,
        LabelScorer::new(Arc::new(client)),
        Dispatcher::new(Immediate),
    )
}

#[test]
fn test_run_settings_from_config() {
    let config = Config {
        chunk_size: NonZeroUsize::new(7).unwrap(),
        ..Config::with_api_key("key")
    };

    let settings = RunSettings::from(&config);

    assert_eq!(settings.chunk_size.get(), 7);
    assert_eq!(settings.output_prefix, "manufacturing-scores");
    assert_eq!(settings.input_path, config.input_path);
}

#[test]
fn test_from_config_builds_production_pipeline() {
    let config = Config {
        pacing_interval: Duration::from_millis(250),
        failure_policy: FailurePolicy::CollectPartial,
        ..Config::with_api_key("key")
    };

    let pipeline = Pipeline::from_config(&config);

    assert_eq!(pipeline.settings(), &RunSettings::from(&config));
    assert_eq!(
        pipeline.dispatcher().pacing(),
        &FixedStagger::new(Duration::from_millis(250))
    );
    assert_eq!(pipeline.dispatcher().policy(), FailurePolicy::CollectPartial);
}

#[test]
fn test_error_helpers() {
    let missing: PipelineError = ConfigError::MissingCredential {
        names: &["LABELSCORE_API_KEY"],
    }
    .into();

    assert!(missing.is_missing_credential());
    assert_eq!(missing.failed_chunk(), None);
}

#[tokio::test]
async fn test_run_writes_first_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "a\nb\nc\n").await;

    let summary = pipeline(
        settings(dir.path(), 2),
        MockCompletionClient::new().with_default_score(0.4),
    )
    .run()
    .await
    .expect("run should succeed");

    assert_eq!(summary.run_number, 1);
    assert_eq!(summary.labels, 3);
    assert_eq!(summary.chunks, 2);
    assert_eq!(summary.distinct_labels, 3);
    assert!(
        summary
            .artifact_path
            .ends_with("scores/manufacturing-scores-run-1.json")
    );
    assert!(summary.artifact_path.exists());
}

#[tokio::test]
async fn test_consecutive_runs_increment_run_number() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "a\n").await;
    let pipeline = pipeline(settings(dir.path(), 10), MockCompletionClient::new());

    let first = pipeline.run().await.expect("first run");
    let second = pipeline.run().await.expect("second run");

    assert_eq!(first.run_number, 1);
    assert_eq!(second.run_number, 2);
    assert!(first.artifact_path.exists());
    assert!(second.artifact_path.exists());
}

#[tokio::test]
async fn test_empty_input_writes_empty_object() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "\n   \n").await;
    let client = MockCompletionClient::new();

    let pipeline = pipeline(settings(dir.path(), 10), client);
    let summary = pipeline.run().await.expect("run should succeed");

    assert_eq!(summary.chunks, 0);
    let written = tokio::fs::read_to_string(&summary.artifact_path)
        .await
        .expect("read artifact");
    assert_eq!(written, "{}");
}

#[tokio::test]
async fn test_missing_input_is_io_failure_without_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let err = pipeline(settings(dir.path(), 10), MockCompletionClient::new())
        .run()
        .await
        .expect_err("run should fail");

    assert!(matches!(err, PipelineError::Input(_)));
    assert!(!dir.path().join("scores").exists());
}

#[tokio::test]
async fn test_malformed_reply_aborts_with_chunk_index() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "a\nb\nc\n").await;
    let client = MockCompletionClient::new().reply_when("c", "I cannot help with that.");

    let err = pipeline(settings(dir.path(), 2), client)
        .run()
        .await
        .expect_err("run should fail");

    assert_eq!(err.failed_chunk(), Some(1));
    assert!(!dir.path().join("scores").exists());
}

#[tokio::test]
async fn test_partial_policy_reports_all_failures_without_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "a\nb\nc\nd\n").await;
    let client = MockCompletionClient::new()
        .fail_when("b", "quota exceeded")
        .reply_when("d", "not json");

    let pipeline = Pipeline::new(
        settings(dir.path(), 1),
        LabelScorer::new(Arc::new(client)),
        Dispatcher::new(Immediate).with_policy(FailurePolicy::CollectPartial),
    );
    let err = pipeline.run().await.expect_err("run should fail");

    assert!(matches!(err, PipelineError::IncompleteRun { .. }));
    assert_eq!(err.failed_chunks(), vec![1, 3]);
    assert_eq!(err.failed_chunk(), Some(1));
    assert!(err.to_string().contains("[1, 3]"));
    assert!(!dir.path().join("scores").exists());
}
