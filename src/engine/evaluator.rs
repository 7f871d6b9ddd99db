//! Single-domain evaluation orchestrator.
//!
//! Sequences the provider calls for one domain and assembles the final
//! `DomainEvaluation`: availability and appraisal fetched concurrently
//! (both load-bearing), registrant fetched only for taken domains
//! (enrichment), then the scoring policy applied to the gathered
//! signals. Construction of the result is atomic — callers never see a
//! partially filled record.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::EvalError;
use crate::providers::{
    AppraisalProvider, AvailabilityProvider, RegistrantProvider, UNKNOWN_REGISTRANT,
};
use crate::scoring::ScoringPolicy;
use crate::types::{normalize_domain, DomainEvaluation, Recommendation};

/// Evaluates one domain at a time against the three provider signals.
///
/// Holds the providers as trait objects so any adapter (or test mock)
/// satisfying the contracts can be plugged in.
pub struct Evaluator {
    availability: Arc<dyn AvailabilityProvider>,
    appraisal: Arc<dyn AppraisalProvider>,
    registrant: Arc<dyn RegistrantProvider>,
    policy: ScoringPolicy,
}

impl Evaluator {
    pub fn new(
        availability: Arc<dyn AvailabilityProvider>,
        appraisal: Arc<dyn AppraisalProvider>,
        registrant: Arc<dyn RegistrantProvider>,
        policy: ScoringPolicy,
    ) -> Self {
        Self {
            availability,
            appraisal,
            registrant,
            policy,
        }
    }

    /// Evaluate a single domain.
    ///
    /// Fails with `InvalidDomain` before any provider call for malformed
    /// input, and with `ProviderUnavailable` when a load-bearing signal
    /// (availability or appraisal) cannot be fetched. A registrant
    /// failure degrades to the `"unknown"` sentinel instead.
    pub async fn evaluate(&self, raw: &str) -> Result<DomainEvaluation, EvalError> {
        let domain = normalize_domain(raw)?;

        // The two load-bearing signals have no data dependency on each
        // other; fetch them concurrently and require both before scoring.
        let (availability, appraisal) = tokio::join!(
            self.availability.check_availability(&domain),
            self.appraisal.get_appraisal(&domain),
        );
        let availability =
            availability.map_err(|e| EvalError::provider("availability", &domain, e))?;
        let appraisal = appraisal.map_err(|e| EvalError::provider("appraisal", &domain, e))?;

        // Registrant only matters for taken domains — an available one
        // has no current owner worth looking up.
        let registrant = if availability.available {
            None
        } else {
            match self.registrant.get_registrant(&domain).await {
                Ok(name) => Some(name),
                Err(e) => {
                    warn!(%domain, error = %e, "Registrant lookup failed, using sentinel");
                    Some(UNKNOWN_REGISTRANT.to_string())
                }
            }
        };

        let recommendation = if self.policy.decide(&domain, &availability, &appraisal) {
            Recommendation::Buy
        } else {
            Recommendation::Skip
        };

        info!(
            %domain,
            available = availability.available,
            go_value = %appraisal.go_value,
            sale_probability = %appraisal.sale_probability,
            recommendation = %recommendation,
            "Domain evaluated"
        );

        Ok(DomainEvaluation {
            domain,
            is_available: availability.available,
            go_value: appraisal.go_value,
            sale_probability: appraisal.sale_probability,
            recommendation,
            price: availability.price,
            currency: availability.currency,
            registrant,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
