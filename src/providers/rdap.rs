//! RDAP registrant lookup.
//!
//! Best-effort `RegistrantProvider` over the public RDAP bootstrap
//! service (default `https://rdap.org`), which redirects to the
//! authoritative registry for each TLD. Registries differ wildly in how
//! much contact data they publish, so extraction is a cascade of hints:
//! the registrant entity's vCard name, then the registrar's, then the
//! `"unknown"` sentinel. Nothing here ever fails an evaluation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{RegistrantProvider, UNKNOWN_REGISTRANT};

const DEFAULT_BASE_URL: &str = "https://rdap.org";

/// Per-call timeout; registries behind the bootstrap redirect can be slow.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ---------------------------------------------------------------------------
// API response types (RDAP JSON → Rust)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RdapDomain {
    #[serde(default)]
    entities: Vec<RdapEntity>,
}

#[derive(Debug, Deserialize)]
struct RdapEntity {
    #[serde(default)]
    roles: Vec<String>,
    /// jCard: `["vcard", [["fn", {}, "text", "Example Org"], …]]`
    #[serde(default, rename = "vcardArray")]
    vcard_array: Option<Value>,
    /// Registrars often nest their abuse/registrant contacts.
    #[serde(default)]
    entities: Vec<RdapEntity>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// RDAP-backed registrant lookup.
pub struct RdapClient {
    http: Client,
    base_url: String,
}

impl RdapClient {
    pub fn new(base_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .user_agent("domainscout/0.1.0")
            .build()
            .context("Failed to build HTTP client for RDAP")?;

        Ok(Self {
            http,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    // -- Internal helpers ------------------------------------------------

    /// Pull a display name out of a jCard: `fn` first, `org` as backup.
    fn vcard_name(vcard: &Value) -> Option<String> {
        let props = vcard.get(1)?.as_array()?;
        for wanted in ["fn", "org"] {
            for prop in props {
                let prop = prop.as_array()?;
                if prop.first()?.as_str()? != wanted {
                    continue;
                }
                if let Some(text) = prop.get(3).and_then(Value::as_str) {
                    let text = text.trim();
                    if !text.is_empty() {
                        return Some(text.to_string());
                    }
                }
            }
        }
        None
    }

    /// Depth-first search for an entity with the given role that carries
    /// a usable vCard name.
    fn find_name(entities: &[RdapEntity], role: &str) -> Option<String> {
        for entity in entities {
            if entity.roles.iter().any(|r| r.eq_ignore_ascii_case(role)) {
                if let Some(name) = entity.vcard_array.as_ref().and_then(Self::vcard_name) {
                    return Some(name);
                }
            }
            if let Some(name) = Self::find_name(&entity.entities, role) {
                return Some(name);
            }
        }
        None
    }

    fn extract_registrant(domain: &RdapDomain) -> String {
        Self::find_name(&domain.entities, "registrant")
            .or_else(|| Self::find_name(&domain.entities, "registrar"))
            .unwrap_or_else(|| UNKNOWN_REGISTRANT.to_string())
    }
}

#[async_trait]
impl RegistrantProvider for RdapClient {
    /// Look up the registrant of a taken domain.
    ///
    /// Never propagates a failure — lookup errors degrade to the
    /// `"unknown"` sentinel so enrichment can't sink an evaluation.
    async fn get_registrant(&self, domain: &str) -> Result<String> {
        let url = format!("{}/domain/{}", self.base_url, urlencoding::encode(domain));
        debug!(url = %url, "RDAP request");

        let result: Result<RdapDomain> = async {
            let resp = self
                .http
                .get(&url)
                .header("Accept", "application/rdap+json")
                .send()
                .await
                .context("RDAP request failed")?;

            if !resp.status().is_success() {
                anyhow::bail!("RDAP error {}", resp.status());
            }

            resp.json().await.context("Failed to parse RDAP response")
        }
        .await;

        match result {
            Ok(rdap) => Ok(Self::extract_registrant(&rdap)),
            Err(e) => {
                warn!(domain, error = %e, "RDAP lookup failed, registrant unknown");
                Ok(UNKNOWN_REGISTRANT.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
