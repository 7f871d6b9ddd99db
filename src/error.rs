//! Error taxonomy for the evaluation core.
//!
//! Only failures that are load-bearing for a decision surface here.
//! Degraded-but-usable signals (a zero appraisal, an unknown registrant)
//! are absorbed inside the provider adapters and never become errors.

use thiserror::Error;

/// Failure evaluating a single domain.
///
/// The batch runner isolates these per entry — one bad domain never
/// aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The input string is not a plausible domain name. Rejected before
    /// any provider is called.
    #[error("invalid domain name {0:?}")]
    InvalidDomain(String),

    /// A load-bearing provider (availability or appraisal) could not be
    /// reached or returned garbage. The evaluation for this domain is
    /// aborted rather than scored on guessed values.
    #[error("{provider} provider unavailable for {domain}")]
    ProviderUnavailable {
        provider: &'static str,
        domain: String,
        #[source]
        source: anyhow::Error,
    },
}

impl EvalError {
    /// Shorthand for wrapping a provider failure.
    pub fn provider(provider: &'static str, domain: &str, source: anyhow::Error) -> Self {
        Self::ProviderUnavailable {
            provider,
            domain: domain.to_string(),
            source,
        }
    }
}
