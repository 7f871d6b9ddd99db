//! Signal providers.
//!
//! Defines the three provider traits the evaluation core consumes and
//! provides implementations for:
//! - GoDaddy — availability/price checks and GoValue appraisals
//! - RDAP — best-effort registrant lookup for taken domains
//!
//! The core depends only on these traits, never on a concrete adapter,
//! so presentation layers and tests can swap in anything that satisfies
//! the contracts.

pub mod godaddy;
pub mod rdap;

use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::types::{DomainAppraisal, DomainAvailability};

/// Reports whether a domain can be registered, and at what price.
///
/// Must return a definitive available/unavailable answer; price and
/// currency are optional enrichment.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability>;
}

/// Produces an automated resale appraisal.
///
/// Implementations fail safe: when the upstream service cannot supply
/// real numbers they return a zero-valued appraisal instead of an error,
/// biasing the decision toward SKIP rather than crashing a batch.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AppraisalProvider: Send + Sync {
    async fn get_appraisal(&self, domain: &str) -> Result<DomainAppraisal>;
}

/// Looks up the current registrant of a taken domain.
///
/// Best-effort enrichment only — implementations return a sentinel
/// string rather than propagating failures, and the evaluator tolerates
/// an error here anyway.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrantProvider: Send + Sync {
    async fn get_registrant(&self, domain: &str) -> Result<String>;
}

/// Sentinel registrant used when the lookup cannot produce a real name.
pub const UNKNOWN_REGISTRANT: &str = "unknown";
