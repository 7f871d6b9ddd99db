//! Batch evaluation runner.
//!
//! Applies the evaluator across a list of domains with a bounded worker
//! pool. Evaluations share no mutable state, so the only coordination
//! here is ordering: results come back positionally aligned with the
//! input regardless of which evaluation finishes first. A failed domain
//! stays in its slot as an error marker — it is never dropped and never
//! takes the rest of the batch down with it.

use futures::stream::{self, Stream, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

use super::Evaluator;
use crate::types::EvaluationOutcome;

/// Default bound on concurrent evaluations — keeps us polite toward
/// third-party rate limits.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Evaluates batches of domains through a shared `Evaluator`.
pub struct BatchRunner {
    evaluator: Arc<Evaluator>,
    concurrency: usize,
}

impl BatchRunner {
    pub fn new(evaluator: Arc<Evaluator>, concurrency: usize) -> Self {
        Self {
            evaluator,
            concurrency: concurrency.max(1),
        }
    }

    /// Stream outcomes in input order as they complete.
    ///
    /// Dropping the stream cancels the in-flight remainder cleanly;
    /// outcomes already yielded stay with the caller. Up to
    /// `concurrency` evaluations run at a time.
    pub fn evaluate_stream(
        &self,
        domains: Vec<String>,
    ) -> impl Stream<Item = EvaluationOutcome> + '_ {
        stream::iter(domains)
            .map(move |domain| {
                let evaluator = Arc::clone(&self.evaluator);
                async move {
                    match evaluator.evaluate(&domain).await {
                        Ok(eval) => EvaluationOutcome::Evaluated(eval),
                        Err(error) => {
                            warn!(domain = %domain, error = %error, "Evaluation failed");
                            EvaluationOutcome::Failed { domain, error }
                        }
                    }
                }
            })
            .buffered(self.concurrency)
    }

    /// Evaluate every domain and collect the outcomes.
    ///
    /// The sole entry point for presentation layers. The returned vector
    /// has exactly one entry per input domain, in input order; duplicates
    /// are evaluated independently.
    pub async fn evaluate_all(&self, domains: Vec<String>) -> Vec<EvaluationOutcome> {
        let total = domains.len();
        info!(domains = total, concurrency = self.concurrency, "Starting batch evaluation");

        let outcomes: Vec<EvaluationOutcome> = self.evaluate_stream(domains).collect().await;

        let failed = outcomes
            .iter()
            .filter(|o| matches!(o, EvaluationOutcome::Failed { .. }))
            .count();
        info!(evaluated = total - failed, failed, "Batch evaluation complete");

        outcomes
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
