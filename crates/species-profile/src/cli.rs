use std::io::Write;

use clap::Parser;
use serde::Serialize;
use species_profile::{ProfileConfig, ProfileOrchestrator, Result, SpeciesProfile};
use tokio::io::{AsyncBufReadExt, BufReader};

const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Parser)]
#[command(
    name = "species-profile",
    version,
    about = "Resolve a species name to its classification and a place it has been recorded"
)]
pub struct Cli {
    /// Common or scientific names to resolve; prompts interactively when omitted
    pub names: Vec<String>,

    /// Print one JSON object per query instead of text
    #[arg(long)]
    pub json: bool,

    /// GBIF v1 API base URL [env: GBIF_API_URL]
    #[arg(long, value_name = "URL")]
    pub gbif_url: Option<String>,

    /// OBIS v3 API base URL [env: OBIS_API_URL]
    #[arg(long, value_name = "URL")]
    pub obis_url: Option<String>,

    /// Nominatim base URL [env: NOMINATIM_URL]
    #[arg(long, value_name = "URL")]
    pub nominatim_url: Option<String>,

    /// User-Agent sent to Nominatim [env: NOMINATIM_USER_AGENT]
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Cli {
    /// Layer command-line overrides on top of `config`
    pub fn apply(&self, mut config: ProfileConfig) -> ProfileConfig {
        if let Some(url) = &self.gbif_url {
            config.gbif_base_url.clone_from(url);
        }
        if let Some(url) = &self.obis_url {
            config.obis_base_url.clone_from(url);
        }
        if let Some(url) = &self.nominatim_url {
            config.nominatim_base_url.clone_from(url);
        }
        if let Some(ua) = &self.user_agent {
            config.user_agent.clone_from(ua);
        }
        config
    }
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    query: &'a str,
    profile: Option<&'a SpeciesProfile>,
}

/// Resolve each name in turn. Returns false if any of them failed.
pub async fn batch(orchestrator: &ProfileOrchestrator, names: &[String], json: bool) -> Result<bool> {
    let mut all_found = true;
    let mut stdout = std::io::stdout();
    for name in names {
        let profile = orchestrator.build_profile(name).await;
        all_found &= profile.is_some();
        write_outcome(&mut stdout, name, profile.as_ref(), json)?;
    }
    Ok(all_found)
}

/// Prompt until `exit` or end of input
pub async fn interactive(orchestrator: &ProfileOrchestrator, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    writeln!(stdout, "--- Species Profile Finder ---")?;
    writeln!(stdout, "Enter a species name (e.g., Tiger Shark, Carcharodon carcharias)")?;

    loop {
        write!(stdout, "\nEnter species name (or type '{EXIT_COMMAND}' to quit): ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();
        if query.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let profile = orchestrator.build_profile(query).await;
        write_outcome(&mut stdout, query, profile.as_ref(), json)?;
    }
    Ok(())
}

fn write_outcome<W: Write>(
    out: &mut W,
    query: &str,
    profile: Option<&SpeciesProfile>,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &JsonOutcome { query, profile })?;
        writeln!(out)?;
        return Ok(());
    }

    match profile {
        Some(p) => {
            writeln!(out, "\nSUCCESS! Profile for '{}':", p.scientific_name)?;
            writeln!(out, "  Classification: {}", p.classification)?;
            writeln!(out, "  Coordinates:    {}", p.coordinate_text())?;
            writeln!(out, "  Found in:       {}", p.location_text())?;
        }
        None => {
            writeln!(out, "\nFAILURE! Could not retrieve a full profile for '{query}'.")?;
        }
    }
    Ok(())
}
