//! End-to-end pipeline tests against the mock completion backend.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use labelscore::{
    DispatchError, Dispatcher, FailurePolicy, Immediate, LabelScorer, MockCompletionClient,
    Pipeline, PipelineError, RunSettings,
};
use tempfile::TempDir;

fn settings(dir: &Path, chunk_size: usize) -> RunSettings {
    RunSettings {
        input_path: dir.join("extracted_labels.txt"),
        output_dir: dir.join("ai-generated-scores"),
        output_prefix: "manufacturing-scores".to_string(),
        chunk_size: NonZeroUsize::new(chunk_size).expect("non-zero chunk size"),
    }
}

async fn write_input(dir: &Path, contents: &str) {
    tokio::fs::write(dir.join("extracted_labels.txt"), contents)
        .await
        .expect("Failed to write input");
}

fn pipeline(
    settings: RunSettings,
    client: Arc<MockCompletionClient>,
    policy: FailurePolicy,
) -> Pipeline<LabelScorer<MockCompletionClient>, Immediate> {
    Pipeline::new(
        settings,
        LabelScorer::new(client),
        Dispatcher::new(Immediate).with_policy(policy),
    )
}

#[tokio::test]
async fn test_duplicates_collapse_into_sorted_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "CNC\nCNC\nwelding\n\n").await;

    let client = Arc::new(
        MockCompletionClient::new()
            .reply_when(
                "CNC",
                "```json\n[{\"word\": \"CNC\", \"confidence_score\": 0.9}, {\"word\": \"CNC\", \"confidence_score\": 0.9}]\n```",
            )
            .reply_when(
                "welding",
                "[{\"word\": \"welding\", \"confidence_score\": 0.3, \"id\": 1}]",
            ),
    );

    let summary = pipeline(
        settings(dir.path(), 2),
        Arc::clone(&client),
        FailurePolicy::AbortOnFirst,
    )
    .run()
    .await
    .expect("run should succeed");

    assert_eq!(client.call_count(), 2);
    assert_eq!(summary.labels, 3);
    assert_eq!(summary.chunks, 2);
    assert_eq!(summary.distinct_labels, 2);
    assert!(
        summary
            .artifact_path
            .ends_with("ai-generated-scores/manufacturing-scores-run-1.json")
    );

    let written = tokio::fs::read_to_string(&summary.artifact_path)
        .await
        .expect("Failed to read artifact");
    assert_eq!(written, "{\n  \"CNC\": 0.9,\n  \"welding\": 0.3\n}");
}

#[tokio::test]
async fn test_run_number_follows_highest_existing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "lathe\n").await;

    let out = dir.path().join("ai-generated-scores");
    tokio::fs::create_dir_all(&out).await.unwrap();
    for name in [
        "manufacturing-scores-run-3.json",
        "manufacturing-scores-run-7.json",
        "other-run-40.json",
        "notes.txt",
    ] {
        tokio::fs::write(out.join(name), "{}").await.unwrap();
    }

    let summary = pipeline(
        settings(dir.path(), 100),
        Arc::new(MockCompletionClient::new()),
        FailurePolicy::AbortOnFirst,
    )
    .run()
    .await
    .expect("run should succeed");

    assert_eq!(summary.run_number, 8);
    assert_eq!(
        summary.artifact_path,
        out.join("manufacturing-scores-run-8.json")
    );
    assert!(summary.artifact_path.exists());
}

#[tokio::test]
async fn test_transport_failure_aborts_without_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "milling\nwelding\nturning\n").await;

    let client = Arc::new(MockCompletionClient::new().fail_when("welding", "connection reset"));

    let err = pipeline(
        settings(dir.path(), 1),
        client,
        FailurePolicy::AbortOnFirst,
    )
    .run()
    .await
    .expect_err("run should fail");

    assert_eq!(err.failed_chunk(), Some(1));
    match err {
        PipelineError::Dispatch(DispatchError::ChunkScoringFailed { index, source }) => {
            assert_eq!(index, 1);
            assert!(!source.is_malformed());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("ai-generated-scores").exists());
}

#[tokio::test]
async fn test_partial_policy_fails_without_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_input(dir.path(), "milling\nwelding\nturning\n").await;

    let client = Arc::new(
        MockCompletionClient::new()
            .with_default_score(0.8)
            .reply_when("welding", "not json at all"),
    );

    let err = pipeline(
        settings(dir.path(), 1),
        Arc::clone(&client),
        FailurePolicy::CollectPartial,
    )
    .run()
    .await
    .expect_err("incomplete run should fail");

    assert_eq!(client.call_count(), 3);
    match err {
        PipelineError::IncompleteRun { ref failed } => assert_eq!(failed, &vec![1]),
        ref other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.failed_chunk(), Some(1));
    assert!(!dir.path().join("ai-generated-scores").exists());
}
