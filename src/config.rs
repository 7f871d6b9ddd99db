//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (registrar API credentials) are referenced by env-var name in
//! the config and resolved at runtime via `std::env::var`, keeping the
//! core and its tests free of ambient environment coupling.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub registrar: RegistrarConfig,
    pub whois: WhoisConfig,
    pub runner: RunnerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "SCOUT-001".to_string(),
        }
    }
}

/// Registrar (GoDaddy) API settings. The default base URL is the OTE
/// test environment — production must be opted into explicitly.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RegistrarConfig {
    pub base_url: String,
    pub api_key_env: String,
    pub api_secret_env: String,
    pub timeout_secs: Option<u64>,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.ote-godaddy.com".to_string(),
            api_key_env: "GODADDY_API_KEY".to_string(),
            api_secret_env: "GODADDY_API_SECRET".to_string(),
            timeout_secs: None,
        }
    }
}

/// Registrant (RDAP) lookup settings.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WhoisConfig {
    pub rdap_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RunnerConfig {
    /// Bound on concurrent domain evaluations.
    pub concurrency: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            concurrency: crate::engine::runner::DEFAULT_CONCURRENCY,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
