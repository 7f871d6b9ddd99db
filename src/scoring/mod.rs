//! Scoring policy — the pure BUY/SKIP decision.
//!
//! An ordered sequence of short-circuiting gates over the availability
//! and appraisal signals. The first failing gate forces SKIP; only a
//! domain that clears every gate is a BUY. The policy performs no I/O
//! and depends only on inputs already fetched.

pub mod tier;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::types::{DomainAppraisal, DomainAvailability};
use tier::TldTier;

// ---------------------------------------------------------------------------
// Configuration (defaults are the production thresholds)
// ---------------------------------------------------------------------------

/// Thresholds and penalties for the scoring gates.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Minimum go_value / sale probability per TLD tier.
    pub premium_min_value: Decimal,
    pub premium_min_prob: Decimal,
    pub standard_min_value: Decimal,
    pub standard_min_prob: Decimal,
    pub obscure_min_value: Decimal,
    pub obscure_min_prob: Decimal,
    /// Added to min_value when the label carries a single hyphen.
    pub hyphen_surcharge: Decimal,
    /// Added to min_value for short mixed-alphanumeric labels.
    pub mixed_digit_surcharge: Decimal,
    /// Mixed-alphanumeric labels longer than this are unsellable.
    pub mixed_digit_max_len: usize,
    /// Labels longer than this are unsellable regardless of content.
    pub max_label_len: usize,
    /// Required go_value multiple over the purchase price.
    pub roi_multiple: Decimal,
    /// Above this price the deal must clear the high-price multiple.
    pub price_risk_cap: Decimal,
    pub high_price_roi_multiple: Decimal,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            premium_min_value: dec!(500),
            premium_min_prob: dec!(0.2),
            standard_min_value: dec!(1000),
            standard_min_prob: dec!(0.3),
            obscure_min_value: dec!(2500),
            obscure_min_prob: dec!(0.4),
            hyphen_surcharge: dec!(500),
            mixed_digit_surcharge: dec!(500),
            mixed_digit_max_len: 6,
            max_label_len: 20,
            roi_multiple: dec!(3),
            price_risk_cap: dec!(2000),
            high_price_roi_multiple: dec!(10),
        }
    }
}

impl PolicyConfig {
    fn min_value_for(&self, tier: TldTier) -> Decimal {
        match tier {
            TldTier::Premium => self.premium_min_value,
            TldTier::Standard => self.standard_min_value,
            TldTier::Obscure => self.obscure_min_value,
        }
    }

    fn min_prob_for(&self, tier: TldTier) -> Decimal {
        match tier {
            TldTier::Premium => self.premium_min_prob,
            TldTier::Standard => self.standard_min_prob,
            TldTier::Obscure => self.obscure_min_prob,
        }
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Decides BUY vs SKIP for one domain.
pub struct ScoringPolicy {
    config: PolicyConfig,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl ScoringPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Access the policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Run every gate in order. Returns true for BUY.
    ///
    /// Callers are expected to hand in a normalized domain; a string
    /// without a dot degrades to label = TLD = the whole string.
    pub fn decide(
        &self,
        domain: &str,
        availability: &DomainAvailability,
        appraisal: &DomainAppraisal,
    ) -> bool {
        // Gate 1 — nothing to buy if it's taken.
        if !availability.available {
            debug!(domain, "skip: not available");
            return false;
        }

        // Gate 2 — tier thresholds from the TLD.
        let tld = domain.rsplit('.').next().unwrap_or(domain).to_lowercase();
        let label = domain.split('.').next().unwrap_or(domain);
        let tier = TldTier::classify(&tld);
        let mut min_value = self.config.min_value_for(tier);
        let min_prob = self.config.min_prob_for(tier);

        // Gate 3 — hyphens. More than one is junk; exactly one raises the bar.
        let hyphens = label.matches('-').count();
        if hyphens > 1 {
            debug!(domain, hyphens, "skip: too many hyphens");
            return false;
        }
        if hyphens == 1 {
            min_value += self.config.hyphen_surcharge;
        }

        // Gate 4 — digits. Pure-numeric labels (888.com) are fine; digits
        // mixed with letters are hard to sell unless the label is short.
        let label_len = label.chars().count();
        let has_digit = label.chars().any(|c| c.is_ascii_digit());
        if has_digit && !label.chars().all(|c| c.is_ascii_digit()) {
            if label_len > self.config.mixed_digit_max_len {
                debug!(domain, label_len, "skip: long mixed-alphanumeric label");
                return false;
            }
            min_value += self.config.mixed_digit_surcharge;
        }

        // Gate 5 — overall length.
        if label_len > self.config.max_label_len {
            debug!(domain, label_len, "skip: label too long");
            return false;
        }

        // Gate 6 — ROI, only when a positive purchase price is known.
        if let Some(price) = availability.price {
            if price > Decimal::ZERO {
                if appraisal.go_value < price * self.config.roi_multiple {
                    debug!(
                        domain,
                        price = %price,
                        go_value = %appraisal.go_value,
                        "skip: below minimum markup"
                    );
                    return false;
                }
                if price > self.config.price_risk_cap
                    && appraisal.go_value < price * self.config.high_price_roi_multiple
                {
                    debug!(
                        domain,
                        price = %price,
                        go_value = %appraisal.go_value,
                        "skip: expensive without exceptional upside"
                    );
                    return false;
                }
            }
        }

        // Gate 7 — tier thresholds (after surcharges).
        let buy = appraisal.go_value >= min_value && appraisal.sale_probability >= min_prob;
        debug!(
            domain,
            tier = %tier,
            min_value = %min_value,
            min_prob = %min_prob,
            go_value = %appraisal.go_value,
            sale_probability = %appraisal.sale_probability,
            decision = if buy { "buy" } else { "skip" },
            "scoring complete"
        );
        buy
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
