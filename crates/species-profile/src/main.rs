//! species-profile - look up where a species lives
//!
//! Resolves the names given on the command line, or prompts for names
//! interactively when none are given.

mod cli;

use clap::Parser;
use species_profile::{ProfileConfig, ProfileOrchestrator, Result};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("species_profile=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };

    let args = cli::Cli::parse();
    let config = args.apply(ProfileConfig::from_env());
    info!(gbif = %config.gbif_base_url, obis = %config.obis_base_url, nominatim = %config.nominatim_base_url, "Providers");

    let orchestrator = ProfileOrchestrator::new(&config);

    let all_found = if args.names.is_empty() {
        cli::interactive(&orchestrator, args.json).await?;
        true
    } else {
        cli::batch(&orchestrator, &args.names, args.json).await?
    };

    if !all_found {
        std::process::exit(1);
    }
    Ok(())
}
