use std::future::Future;

use futures_util::future::{join_all, try_join_all};
use tokio::time::{Instant, sleep_until};
use tracing::{error, info};

use super::error::{DispatchError, DispatchResult};
use super::pacing::{FixedStagger, PacingStrategy, millis_saturating};
use super::policy::FailurePolicy;
use super::progress::ProgressCounter;
use crate::scoring::{ScoredChunkResult, ScoringError};

/// Scores a single chunk of labels.
pub trait ChunkScorer: Send + Sync {
    fn score(
        &self,
        chunk: &[String],
    ) -> impl Future<Output = Result<ScoredChunkResult, ScoringError>> + Send;
}

/// Per-chunk outcome of a dispatch, index-aligned with the input chunks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchReport {
    slots: Vec<Option<ScoredChunkResult>>,
}

impl DispatchReport {
    pub fn from_slots(slots: Vec<Option<ScoredChunkResult>>) -> Self {
        Self { slots }
    }

    /// Number of chunks dispatched.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Result for chunk `index`, or `None` if it failed (or is out of range).
    pub fn get(&self, index: usize) -> Option<&ScoredChunkResult> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Indices of chunks that failed, ascending.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }

    /// Returns `true` if every chunk produced a result.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Successful results in chunk order.
    pub fn into_results(self) -> Vec<ScoredChunkResult> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Fans out one scoring call per chunk with staggered starts, then fans back in.
///
/// All calls run concurrently on the current task; the pacing strategy only delays
/// when each one may begin. Completion order is unconstrained, but results are
/// always returned in chunk order.
#[derive(Debug, Clone)]
pub struct Dispatcher<P = FixedStagger> {
    pacing: P,
    policy: FailurePolicy,
}

impl Default for Dispatcher<FixedStagger> {
    fn default() -> Self {
        Self::new(FixedStagger::default())
    }
}

impl<P: PacingStrategy> Dispatcher<P> {
    /// Creates a dispatcher with the default (abort-on-first) failure policy.
    pub fn new(pacing: P) -> Self {
        Self {
            pacing,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn pacing(&self) -> &P {
        &self.pacing
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Scores every chunk and returns the index-aligned report.
    ///
    /// Under [`FailurePolicy::AbortOnFirst`] the first failure is returned as
    /// [`DispatchError::ChunkScoringFailed`] and outstanding calls are dropped.
    pub async fn dispatch<C, S>(&self, chunks: &[C], scorer: &S) -> DispatchResult<DispatchReport>
    where
        C: AsRef<[String]> + Sync,
        S: ChunkScorer,
    {
        let total_chunks = chunks.len();
        let total_labels: usize = chunks.iter().map(|c| c.as_ref().len()).sum();
        let progress = &ProgressCounter::new(total_labels);
        let start = Instant::now();

        info!(
            chunks = total_chunks,
            labels = total_labels,
            policy = %self.policy,
            "Dispatching scoring requests"
        );

        let calls = chunks.iter().enumerate().map(|(index, chunk)| {
            let delay = self.pacing.delay_for(index);
            async move {
                if !delay.is_zero() {
                    sleep_until(start + delay).await;
                }

                let chunk = chunk.as_ref();
                info!(
                    chunk = index + 1,
                    total = total_chunks,
                    labels = chunk.len(),
                    "Processing chunk"
                );

                match scorer.score(chunk).await {
                    Ok(result) => {
                        let scored = progress.record(result.len());
                        info!(chunk = index + 1, "Chunk done");
                        info!(scored, total = progress.total(), "Progress");
                        Ok(result)
                    }
                    Err(source) => {
                        error!(chunk = index + 1, error = %source, "Chunk scoring failed");
                        Err(DispatchError::ChunkScoringFailed { index, source })
                    }
                }
            }
        });

        let report = match self.policy {
            FailurePolicy::AbortOnFirst => {
                let results = try_join_all(calls).await?;
                DispatchReport::from_slots(results.into_iter().map(Some).collect())
            }
            FailurePolicy::CollectPartial => {
                let outcomes = join_all(calls).await;
                DispatchReport::from_slots(outcomes.into_iter().map(Result::ok).collect())
            }
        };

        info!(
            completed = total_chunks - report.failed_indices().len(),
            failed = report.failed_indices().len(),
            scored = progress.scored(),
            elapsed_ms = millis_saturating(start.elapsed()),
            "Dispatch finished"
        );

        Ok(report)
    }
}
