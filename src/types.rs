//! Shared types for the SCOUT evaluator.
//!
//! These records form the data model used across all modules. Every one
//! of them is an immutable value: constructed once per evaluation,
//! handed to the presentation layer, and discarded. Nothing here is
//! persisted and nothing carries wall-clock metadata, so evaluating the
//! same domain twice against identical provider responses yields
//! identical records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EvalError;

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Registration status of a domain as reported by the registrar.
///
/// `price` is present only when the domain is available and the registrar
/// quoted a positive price; `currency` accompanies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    pub available: bool,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
}

// ---------------------------------------------------------------------------
// Appraisal
// ---------------------------------------------------------------------------

/// Automated resale appraisal for a domain.
///
/// Both values default to zero when the appraisal source cannot supply
/// real numbers — the scoring policy then fails safely toward SKIP
/// instead of buying on a fabricated estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAppraisal {
    pub domain: String,
    /// Estimated resale value in USD.
    pub go_value: Decimal,
    /// Estimated likelihood of an eventual sale (0.0–1.0).
    pub sale_probability: Decimal,
}

impl DomainAppraisal {
    /// The fail-safe appraisal: worthless and unsellable.
    pub fn zero(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            go_value: Decimal::ZERO,
            sale_probability: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Final verdict for a domain. Closed set — there is no "maybe".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Skip,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "BUY"),
            Recommendation::Skip => write!(f, "SKIP"),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// The assembled result for one domain: availability + appraisal signals
/// and the recommendation derived from them.
///
/// `registrant` is populated only for taken domains (there is no owner to
/// look up on an available one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvaluation {
    pub domain: String,
    pub is_available: bool,
    pub go_value: Decimal,
    pub sale_probability: Decimal,
    pub recommendation: Recommendation,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub registrant: Option<String>,
}

impl fmt::Display for DomainEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] value ${} prob {}%",
            self.domain,
            self.recommendation,
            self.go_value,
            self.sale_probability * Decimal::ONE_HUNDRED,
        )
    }
}

/// Per-entry outcome of a batch run.
///
/// A failed evaluation stays in its slot as an error marker so the batch
/// keeps its input order and failures remain distinguishable from
/// domains that were scored SKIP.
#[derive(Debug)]
pub enum EvaluationOutcome {
    Evaluated(DomainEvaluation),
    Failed { domain: String, error: EvalError },
}

impl EvaluationOutcome {
    pub fn domain(&self) -> &str {
        match self {
            EvaluationOutcome::Evaluated(e) => &e.domain,
            EvaluationOutcome::Failed { domain, .. } => domain,
        }
    }

    pub fn as_evaluation(&self) -> Option<&DomainEvaluation> {
        match self {
            EvaluationOutcome::Evaluated(e) => Some(e),
            EvaluationOutcome::Failed { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Domain normalization
// ---------------------------------------------------------------------------

/// Normalize a raw domain string, rejecting anything the providers (and
/// the scoring policy's label/TLD split) could misread.
///
/// Rules: trim, lower-case, require at least one dot with non-empty
/// labels on both sides, and allow only ASCII letters, digits, and
/// hyphens within labels. A string with no dot is rejected outright
/// rather than guessed at.
pub fn normalize_domain(raw: &str) -> Result<String, EvalError> {
    let domain = raw.trim().to_lowercase();

    if domain.is_empty() || !domain.contains('.') {
        return Err(EvalError::InvalidDomain(raw.to_string()));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(EvalError::InvalidDomain(raw.to_string()));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(EvalError::InvalidDomain(raw.to_string()));
        }
    }

    Ok(domain)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
