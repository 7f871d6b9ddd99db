//! SCOUT — Domain Acquisition Intelligence
//!
//! Entry point. Loads configuration, initialises structured logging,
//! wires the provider adapters into the evaluation engine, and runs a
//! batch evaluation over the domains given on the command line.

use anyhow::Result;
use rust_decimal::Decimal;
use secrecy::Secret;
use std::sync::Arc;
use tracing::{info, warn};

use domainscout::config::AppConfig;
use domainscout::engine::{BatchRunner, Evaluator};
use domainscout::providers::godaddy::GoDaddyClient;
use domainscout::providers::rdap::RdapClient;
use domainscout::scoring::ScoringPolicy;
use domainscout::types::EvaluationOutcome;

const BANNER: &str = r#"
 ____   ____ ___  _   _ _____
/ ___| / ___/ _ \| | | |_   _|
\___ \| |  | | | | | | | | |
 ___) | |__| |_| | |_| | | |
|____/ \____\___/ \___/  |_|

  Domain Acquisition Intelligence
  v0.1.0
"#;

/// Domains evaluated when none are given on the command line.
const DEMO_DOMAINS: &[&str] = &["example.com", "myawesomestartup123.com", "google.com"];

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML, falling back to defaults when the
    // file is absent (credentials still come from the environment).
    let cfg = match AppConfig::load("config.toml") {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Note: {e:#} — using default configuration");
            AppConfig::default()
        }
    };

    init_logging();

    println!("{BANNER}");
    info!(
        agent_name = %cfg.agent.name,
        registrar_base_url = %cfg.registrar.base_url,
        concurrency = cfg.runner.concurrency,
        "SCOUT starting up"
    );

    // -- Initialise components -------------------------------------------

    let api_key = AppConfig::resolve_env(&cfg.registrar.api_key_env).unwrap_or_else(|_| {
        warn!(
            env = %cfg.registrar.api_key_env,
            "Registrar API key not set. API calls will fail."
        );
        String::new()
    });
    let api_secret =
        AppConfig::resolve_env(&cfg.registrar.api_secret_env).unwrap_or_default();

    let godaddy = Arc::new(GoDaddyClient::new(
        cfg.registrar.base_url.clone(),
        Secret::new(api_key),
        Secret::new(api_secret),
        cfg.registrar.timeout_secs,
    )?);
    let rdap = Arc::new(RdapClient::new(
        cfg.whois.rdap_base_url.clone(),
        cfg.whois.timeout_secs,
    )?);

    let evaluator = Evaluator::new(
        godaddy.clone(),
        godaddy,
        rdap,
        ScoringPolicy::default(),
    );
    let runner = BatchRunner::new(Arc::new(evaluator), cfg.runner.concurrency);

    // -- Input handling ---------------------------------------------------

    let mut domains: Vec<String> = std::env::args().skip(1).collect();
    if domains.is_empty() {
        println!("Usage: domainscout <domain1> <domain2> ...");
        println!("No domains given — evaluating demo list.\n");
        domains = DEMO_DOMAINS.iter().map(|s| s.to_string()).collect();
    }

    let outcomes = runner.evaluate_all(domains).await;
    print_report(&outcomes);

    Ok(())
}

/// Render the batch report. Failed domains are shown distinctly from
/// domains that were scored SKIP.
fn print_report(outcomes: &[EvaluationOutcome]) {
    println!("{:-<78}", "");
    for outcome in outcomes {
        match outcome {
            EvaluationOutcome::Evaluated(e) => {
                let verdict = e.recommendation.to_string();
                if e.is_available {
                    let price = match (&e.price, &e.currency) {
                        (Some(p), Some(c)) => format!("{p} {c}"),
                        (Some(p), None) => p.to_string(),
                        _ => "n/a".to_string(),
                    };
                    println!(
                        "{verdict:<6} {:<30} value ${:<10} prob {:>5}%  price {price}",
                        e.domain,
                        e.go_value,
                        e.sale_probability * Decimal::ONE_HUNDRED,
                    );
                } else {
                    println!(
                        "{verdict:<6} {:<30} taken, registrant: {}",
                        e.domain,
                        e.registrant.as_deref().unwrap_or("unknown"),
                    );
                }
            }
            EvaluationOutcome::Failed { domain, error } => {
                println!("FAIL   {domain:<30} {error}");
            }
        }
    }
    println!("{:-<78}", "");

    let buys = outcomes
        .iter()
        .filter_map(EvaluationOutcome::as_evaluation)
        .filter(|e| e.recommendation == domainscout::types::Recommendation::Buy)
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, EvaluationOutcome::Failed { .. }))
        .count();
    println!(
        "{} domains: {} BUY, {} SKIP, {} failed",
        outcomes.len(),
        buys,
        outcomes.len() - buys - failed,
        failed,
    );
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("domainscout=info"));

    let json_logging = std::env::var("SCOUT_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
