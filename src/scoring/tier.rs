//! TLD tier classification.
//!
//! The extension of a domain is the single biggest driver of resale
//! liquidity, so each tier carries its own value and probability bar.

use std::fmt;

/// Resale-liquidity tier of a top-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TldTier {
    /// com/ai/io — sell at standard thresholds.
    Premium,
    /// net/org/co/app/dev — need a higher bar.
    Standard,
    /// Everything else — only worth flipping with exceptional stats.
    Obscure,
}

impl TldTier {
    /// Classify a TLD (already lower-cased, no leading dot).
    pub fn classify(tld: &str) -> Self {
        match tld {
            "com" | "ai" | "io" => TldTier::Premium,
            "net" | "org" | "co" | "app" | "dev" => TldTier::Standard,
            _ => TldTier::Obscure,
        }
    }
}

impl fmt::Display for TldTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TldTier::Premium => write!(f, "premium"),
            TldTier::Standard => write!(f, "standard"),
            TldTier::Obscure => write!(f, "obscure"),
        }
    }
}
