//! GoDaddy registrar integration.
//!
//! Implements `AvailabilityProvider` and `AppraisalProvider` against the
//! GoDaddy v1 API.
//!
//! Endpoints: GET /v1/domains/available?domain={domain}
//!            GET /v1/appraisal/{domain}
//! Auth: `Authorization: sso-key {key}:{secret}`
//! Default base URL is the OTE (test) environment; production is
//! configured via `config.toml`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{AppraisalProvider, AvailabilityProvider};
use crate::types::{DomainAppraisal, DomainAvailability};

/// Per-call timeout against the GoDaddy API.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// API response types (GoDaddy JSON → Rust)
// ---------------------------------------------------------------------------

/// Shape returned by `/v1/domains/available`. Only the fields we need.
#[derive(Debug, Deserialize)]
struct AvailableResponse {
    #[serde(default)]
    available: bool,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    currency: Option<String>,
}

/// Shape returned by `/v1/appraisal/{domain}`. GoValue deployments vary
/// in which fields they expose, so everything is optional.
#[derive(Debug, Deserialize)]
struct AppraisalResponse {
    #[serde(default)]
    govalue: Option<Decimal>,
    #[serde(default)]
    sale_probability: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// GoDaddy API client serving both the availability and appraisal signals.
pub struct GoDaddyClient {
    http: Client,
    base_url: String,
    /// Pre-built `sso-key {key}:{secret}` header value.
    auth_header: Secret<String>,
}

impl GoDaddyClient {
    /// Create a new client. `timeout_secs` of `None` uses the default.
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        api_secret: Secret<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .user_agent("domainscout/0.1.0")
            .build()
            .context("Failed to build HTTP client for GoDaddy")?;

        let auth_header = Secret::new(format!(
            "sso-key {}:{}",
            api_key.expose_secret(),
            api_secret.expose_secret(),
        ));

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    // -- Internal helpers ------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(url = %url, "GoDaddy request");

        let resp = self
            .http
            .get(&url)
            .header("Authorization", self.auth_header.expose_secret())
            .header("Accept", "application/json")
            .send()
            .await
            .context("GoDaddy API request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GoDaddy API error {status}: {body}");
        }

        resp.json()
            .await
            .context("Failed to parse GoDaddy response")
    }

    /// Convert an availability response, enforcing the record's
    /// invariant: a price is carried only when the domain is available
    /// and the registrar quoted a positive number.
    fn to_availability(domain: &str, resp: AvailableResponse) -> DomainAvailability {
        let price = resp
            .price
            .filter(|p| resp.available && *p > Decimal::ZERO);
        let currency = price.is_some().then(|| resp.currency).flatten();

        DomainAvailability {
            domain: domain.to_string(),
            available: resp.available,
            price,
            currency,
        }
    }

    /// Convert an appraisal response, clamping into the documented
    /// ranges. Missing fields become zero so the policy fails toward
    /// SKIP, never toward a higher-than-true estimate.
    fn to_appraisal(domain: &str, resp: AppraisalResponse) -> DomainAppraisal {
        let go_value = resp.govalue.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);
        let sale_probability = resp
            .sale_probability
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, Decimal::ONE);

        DomainAppraisal {
            domain: domain.to_string(),
            go_value,
            sale_probability,
        }
    }
}

// ---------------------------------------------------------------------------
// Trait implementations
// ---------------------------------------------------------------------------

#[async_trait]
impl AvailabilityProvider for GoDaddyClient {
    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability> {
        let endpoint = format!(
            "/v1/domains/available?domain={}",
            urlencoding::encode(domain)
        );
        let resp: AvailableResponse = self.get_json(&endpoint).await?;
        Ok(Self::to_availability(domain, resp))
    }
}

#[async_trait]
impl AppraisalProvider for GoDaddyClient {
    /// Fetch the GoValue appraisal for a domain.
    ///
    /// Fail-safe by contract: any request or parse failure yields a
    /// zero-valued appraisal instead of an error, so a flaky appraisal
    /// service degrades batches toward SKIP rather than aborting them.
    async fn get_appraisal(&self, domain: &str) -> Result<DomainAppraisal> {
        let endpoint = format!("/v1/appraisal/{}", urlencoding::encode(domain));
        match self.get_json::<AppraisalResponse>(&endpoint).await {
            Ok(resp) => Ok(Self::to_appraisal(domain, resp)),
            Err(e) => {
                warn!(domain, error = %e, "Appraisal lookup failed, using zero appraisal");
                Ok(DomainAppraisal::zero(domain))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
