//! optic - REST gateway for the Optic social platform
//!
//! Serves the claim-verification endpoint: posts are checked against an
//! external language model, and approval is derived locally from the
//! model's classification and confidence score.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use optic::config::Settings;
use optic::llm::AnthropicClient;
use optic::server;
use optic::verify::VerificationPipeline;

/// optic - claim-verification gateway
#[derive(Parser, Debug)]
#[command(
    name = "optic",
    version,
    about = "Claim-verification gateway for the Optic social platform",
    long_about = "Exposes POST /api/verify: evaluates a post's claim against a\n\
                  language model and derives the approval decision locally.\n\
                  Model outages never block posting (fail-open)."
)]
struct Cli {
    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mut settings = Settings::load();
    if let Some(port) = cli.port {
        settings.port = port;
    }

    let api_key = settings
        .api_key
        .take()
        .context("ANTHROPIC_API_KEY is not set (env or config file)")?;

    let client = AnthropicClient::new(
        settings.base_url,
        api_key,
        settings.model,
        Duration::from_secs(settings.timeout_secs),
    )
    .context("failed to build model client")?;

    let pipeline = VerificationPipeline::new(Box::new(client), settings.max_tokens);

    server::serve(settings.port, settings.workers, pipeline)
}
