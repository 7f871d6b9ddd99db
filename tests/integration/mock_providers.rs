//! Mock signal providers for integration testing.
//!
//! A deterministic provider trio backed by canned per-domain responses,
//! with call recording and a switchable outage — all in-memory with no
//! external dependencies.

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use domainscout::providers::{AppraisalProvider, AvailabilityProvider, RegistrantProvider};
use domainscout::types::{DomainAppraisal, DomainAvailability};

/// Scripted signal source. Domains not present in the maps come back
/// available with a zero appraisal (the fail-safe shape a degraded
/// appraisal service would produce).
pub struct MockSignals {
    availability: HashMap<String, (bool, Option<Decimal>, Option<String>)>,
    appraisals: HashMap<String, (Decimal, Decimal)>,
    registrants: HashMap<String, String>,
    /// If set, availability checks fail with this message.
    outage: Mutex<Option<String>>,
    registrant_calls: Mutex<Vec<String>>,
}

impl MockSignals {
    /// Canned fixture covering the interesting scoring shapes.
    pub fn fixture() -> Arc<Self> {
        let mut availability = HashMap::new();
        let mut appraisals = HashMap::new();
        let mut registrants = HashMap::new();

        // Available, clears the premium bar with no price quoted.
        availability.insert(
            "example.com".to_string(),
            (true, None, None),
        );
        appraisals.insert("example.com".to_string(), (dec!(600), dec!(0.25)));

        // Available but below the standard-tier value bar.
        availability.insert("cheapflip.net".to_string(), (true, None, None));
        appraisals.insert("cheapflip.net".to_string(), (dec!(900), dec!(0.25)));

        // Two hyphens: junk no matter the appraisal.
        availability.insert("my-cool-app123.io".to_string(), (true, None, None));
        appraisals.insert("my-cool-app123.io".to_string(), (dec!(5000), dec!(0.9)));

        // Priced at 1000 with go_value below the 3x markup.
        availability.insert(
            "888.com".to_string(),
            (true, Some(dec!(1000)), Some("USD".to_string())),
        );
        appraisals.insert("888.com".to_string(), (dec!(2900), dec!(0.5)));

        // Taken, with a known registrant.
        availability.insert("google.com".to_string(), (false, None, None));
        appraisals.insert("google.com".to_string(), (dec!(999999), dec!(0.99)));
        registrants.insert("google.com".to_string(), "Google LLC".to_string());

        // Taken, registrant lookup will fail (not in the map).
        availability.insert("shielded.org".to_string(), (false, None, None));
        appraisals.insert("shielded.org".to_string(), (dec!(100), dec!(0.1)));

        Arc::new(Self {
            availability,
            appraisals,
            registrants,
            outage: Mutex::new(None),
            registrant_calls: Mutex::new(Vec::new()),
        })
    }

    /// Make all subsequent availability checks fail.
    pub fn set_outage(&self, msg: &str) {
        *self.outage.lock().unwrap() = Some(msg.to_string());
    }

    /// Domains for which a registrant lookup was attempted.
    pub fn registrant_calls(&self) -> Vec<String> {
        self.registrant_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvailabilityProvider for MockSignals {
    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability> {
        if let Some(msg) = self.outage.lock().unwrap().clone() {
            anyhow::bail!("{msg}");
        }
        let (available, price, currency) = self
            .availability
            .get(domain)
            .cloned()
            .unwrap_or((true, None, None));
        Ok(DomainAvailability {
            domain: domain.to_string(),
            available,
            price,
            currency,
        })
    }
}

#[async_trait]
impl AppraisalProvider for MockSignals {
    async fn get_appraisal(&self, domain: &str) -> Result<DomainAppraisal> {
        let (go_value, sale_probability) = self
            .appraisals
            .get(domain)
            .cloned()
            .unwrap_or((Decimal::ZERO, Decimal::ZERO));
        Ok(DomainAppraisal {
            domain: domain.to_string(),
            go_value,
            sale_probability,
        })
    }
}

#[async_trait]
impl RegistrantProvider for MockSignals {
    async fn get_registrant(&self, domain: &str) -> Result<String> {
        self.registrant_calls
            .lock()
            .unwrap()
            .push(domain.to_string());
        match self.registrants.get(domain) {
            Some(name) => Ok(name.clone()),
            None => anyhow::bail!("no registrant data for {domain}"),
        }
    }
}
