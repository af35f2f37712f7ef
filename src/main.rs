//! # Claim Sightings
//!
//! A retrieval pipeline that sweeps the Google Fact Check Tools API for
//! recent claim reviews, normalizes them into flat "sighting" records, and
//! exports a deduplicated JSON mapping.
//!
//! ## Features
//!
//! - Discovers fact-checking publishers by querying a fixed topic list
//!   (vaccine, congress, covid, climate, facebook, twitter)
//! - Walks the endpoint's cursor-based pagination lazily until exhausted
//! - Derives a deterministic content id for each sighting (the API assigns
//!   no claim ids)
//! - Deduplicates sightings by a (text, claim text) content digest
//! - Writes a single JSON artifact and prints the mapping to stdout
//!
//! ## Usage
//!
//! ```sh
//! FACT_CHECK_API_KEY=... claim_sightings
//! claim_sightings --api-key YOUR_KEY --publisher fullfact.org
//! ```
//!
//! ## Architecture
//!
//! The application runs a strictly sequential pipeline:
//! 1. **Discovery**: find publisher sites with recent matching reviews
//! 2. **Extraction**: pull each publisher's reviews as sighting records
//! 3. **Aggregation**: merge everything into one digest-keyed mapping
//! 4. **Output**: write the JSON artifact, print the mapping

use clap::Parser;
use std::collections::BTreeSet;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod error;
mod models;
mod outputs;
mod pipeline;
mod utils;

use api::{ClientConfig, FactCheckClient};
use cli::Cli;
use outputs::json;
use pipeline::publishers::{TOPIC_QUERIES, discover_publishers};
use pipeline::sightings::collect_sightings;
use utils::ensure_parent_writable;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("claim_sightings starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(
        ?args.output,
        ?args.publisher,
        discovery_max_age_days = args.discovery_max_age_days,
        sightings_max_age_days = args.sightings_max_age_days,
        "Parsed CLI arguments"
    );

    // Early check: ensure the output location is writable
    if !args.no_output {
        if let Err(e) = ensure_parent_writable(&args.output).await {
            error!(
                path = %args.output,
                error = %e,
                "Output location is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let client = FactCheckClient::new(ClientConfig::new(&args.api_key));

    // ---- Discover publishers ----
    let publishers = match &args.publisher {
        Some(site) => {
            info!(%site, "Focusing on a single publisher; skipping discovery");
            BTreeSet::from([site.clone()])
        }
        None => {
            discover_publishers(&client, &TOPIC_QUERIES, args.discovery_max_age_days).await?
        }
    };
    info!(count = publishers.len(), "Publisher set ready");

    // ---- Extract and aggregate sightings ----
    let sightings = collect_sightings(&client, &publishers, args.sightings_max_age_days).await?;
    info!(count = sightings.len(), "Aggregated deduplicated sightings");

    // ---- Output ----
    if args.no_output {
        info!("Output writing disabled; skipping artifact");
    } else {
        json::write_sightings(&sightings, &args.output).await?;
    }

    // Diagnostics go to the tracing subscriber; stdout carries only the
    // final mapping.
    println!("{}", serde_json::to_string(&sightings)?);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
