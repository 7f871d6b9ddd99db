//! End-to-end evaluation flow tests over the mock signal providers.

use std::sync::Arc;

use domainscout::engine::{BatchRunner, Evaluator};
use domainscout::error::EvalError;
use domainscout::providers::UNKNOWN_REGISTRANT;
use domainscout::scoring::ScoringPolicy;
use domainscout::types::{EvaluationOutcome, Recommendation};

use crate::mock_providers::MockSignals;

fn runner(signals: Arc<MockSignals>, concurrency: usize) -> BatchRunner {
    let evaluator = Evaluator::new(
        signals.clone(),
        signals.clone(),
        signals,
        ScoringPolicy::default(),
    );
    BatchRunner::new(Arc::new(evaluator), concurrency)
}

fn domains(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_premium_available_domain_is_buy() {
    let outcomes = runner(MockSignals::fixture(), 1)
        .evaluate_all(domains(&["example.com"]))
        .await;
    let eval = outcomes[0].as_evaluation().unwrap();
    assert!(eval.is_available);
    assert_eq!(eval.recommendation, Recommendation::Buy);
    assert!(eval.registrant.is_none());
}

#[tokio::test]
async fn test_scoring_shapes_end_to_end() {
    // One batch covering the canonical SKIP reasons: tier bar, hyphen
    // junk, and the ROI markup gate.
    let outcomes = runner(MockSignals::fixture(), 2)
        .evaluate_all(domains(&["cheapflip.net", "my-cool-app123.io", "888.com"]))
        .await;

    for outcome in &outcomes {
        let eval = outcome.as_evaluation().unwrap();
        assert_eq!(
            eval.recommendation,
            Recommendation::Skip,
            "{} should be SKIP",
            eval.domain
        );
        assert!(eval.is_available);
    }
    // Price carried through from availability on the priced domain.
    assert_eq!(
        outcomes[2].as_evaluation().unwrap().currency.as_deref(),
        Some("USD")
    );
}

#[tokio::test]
async fn test_taken_domain_reports_registrant() {
    let signals = MockSignals::fixture();
    let outcomes = runner(signals.clone(), 1)
        .evaluate_all(domains(&["google.com"]))
        .await;

    let eval = outcomes[0].as_evaluation().unwrap();
    assert!(!eval.is_available);
    assert_eq!(eval.recommendation, Recommendation::Skip);
    assert_eq!(eval.registrant.as_deref(), Some("Google LLC"));
    assert_eq!(signals.registrant_calls(), vec!["google.com".to_string()]);
}

#[tokio::test]
async fn test_registrant_failure_yields_sentinel_not_error() {
    let outcomes = runner(MockSignals::fixture(), 1)
        .evaluate_all(domains(&["shielded.org"]))
        .await;

    let eval = outcomes[0].as_evaluation().unwrap();
    assert_eq!(eval.registrant.as_deref(), Some(UNKNOWN_REGISTRANT));
}

#[tokio::test]
async fn test_no_registrant_lookup_for_available_domains() {
    let signals = MockSignals::fixture();
    runner(signals.clone(), 2)
        .evaluate_all(domains(&["example.com", "cheapflip.net"]))
        .await;
    assert!(signals.registrant_calls().is_empty());
}

#[tokio::test]
async fn test_batch_order_preserved_with_duplicates_under_concurrency() {
    let outcomes = runner(MockSignals::fixture(), 4)
        .evaluate_all(domains(&["a.com", "b.io", "a.com"]))
        .await;
    let got: Vec<&str> = outcomes.iter().map(|o| o.domain()).collect();
    assert_eq!(got, vec!["a.com", "b.io", "a.com"]);
}

#[tokio::test]
async fn test_availability_outage_isolates_failures_per_entry() {
    let signals = MockSignals::fixture();
    let runner = runner(signals.clone(), 2);

    // Healthy first run.
    let healthy = runner.evaluate_all(domains(&["example.com"])).await;
    assert!(healthy[0].as_evaluation().is_some());

    // Outage: every availability check fails, each entry individually.
    signals.set_outage("registrar maintenance window");
    let outcomes = runner
        .evaluate_all(domains(&["example.com", "google.com"]))
        .await;
    assert_eq!(outcomes.len(), 2);
    for outcome in &outcomes {
        match outcome {
            EvaluationOutcome::Failed { error, .. } => {
                assert!(matches!(
                    error,
                    EvalError::ProviderUnavailable {
                        provider: "availability",
                        ..
                    }
                ));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_invalid_domain_fails_fast_in_batch() {
    let outcomes = runner(MockSignals::fixture(), 2)
        .evaluate_all(domains(&["example.com", "not a domain", "google.com"]))
        .await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].as_evaluation().is_some());
    assert!(matches!(
        &outcomes[1],
        EvaluationOutcome::Failed {
            error: EvalError::InvalidDomain(_),
            ..
        }
    ));
    assert!(outcomes[2].as_evaluation().is_some());
}

#[tokio::test]
async fn test_identical_runs_produce_identical_results() {
    let input = domains(&["example.com", "888.com", "google.com"]);
    let first = runner(MockSignals::fixture(), 3)
        .evaluate_all(input.clone())
        .await;
    let second = runner(MockSignals::fixture(), 1).evaluate_all(input).await;

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        let (a, b) = (a.as_evaluation().unwrap(), b.as_evaluation().unwrap());
        assert_eq!(
            serde_json::to_value(a).unwrap(),
            serde_json::to_value(b).unwrap()
        );
    }
}
