//! Command-line interface definitions for the claim-sightings sweep.
//!
//! All options have defaults reproducing the standard full sweep; only the
//! API key is required, and it is normally supplied via the environment.

use clap::Parser;

/// Command-line arguments for the claim_sightings application.
///
/// # Examples
///
/// ```sh
/// # Full sweep: discover publishers for the built-in topic list, then
/// # aggregate their recent sightings into fce_sightings.json
/// FACT_CHECK_API_KEY=... claim_sightings
///
/// # Focus on a single fact-checking organization
/// claim_sightings --api-key YOUR_KEY --publisher fullfact.org
///
/// # Print the mapping without writing the artifact
/// claim_sightings --api-key YOUR_KEY --no-output
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Google Fact Check Tools API key (sent as a query parameter)
    #[arg(long, env = "FACT_CHECK_API_KEY")]
    pub api_key: String,

    /// Output path for the sightings JSON artifact
    #[arg(short, long, default_value = "fce_sightings.json")]
    pub output: String,

    /// Skip writing the output artifact (the mapping is still printed)
    #[arg(long)]
    pub no_output: bool,

    /// Aggregate a single publisher site instead of running discovery
    #[arg(long)]
    pub publisher: Option<String>,

    /// Freshness window for publisher discovery, in days
    #[arg(long, default_value_t = 90)]
    pub discovery_max_age_days: u32,

    /// Freshness window for per-publisher sightings, in days
    #[arg(long, default_value_t = 30)]
    pub sightings_max_age_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(&["claim_sightings", "--api-key", "k"]);

        assert_eq!(cli.api_key, "k");
        assert_eq!(cli.output, "fce_sightings.json");
        assert!(!cli.no_output);
        assert!(cli.publisher.is_none());
        assert_eq!(cli.discovery_max_age_days, 90);
        assert_eq!(cli.sightings_max_age_days, 30);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(&[
            "claim_sightings",
            "--api-key",
            "k",
            "-o",
            "/tmp/out.json",
            "--publisher",
            "fullfact.org",
            "--sightings-max-age-days",
            "7",
            "--no-output",
        ]);

        assert_eq!(cli.output, "/tmp/out.json");
        assert_eq!(cli.publisher.as_deref(), Some("fullfact.org"));
        assert_eq!(cli.sightings_max_age_days, 7);
        assert!(cli.no_output);
    }
}
