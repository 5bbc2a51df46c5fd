//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Reconnaissance sweep for Internet-exposed Astra Linux hosts
///
/// Runs a fixed set of Shodan queries, aggregates the matches, and
/// writes per-query, combined, geolocation, and summary JSON reports.
///
/// Get your API key at: https://account.shodan.io
#[derive(Parser, Debug)]
#[command(name = "astrascan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full built-in query sweep and write all report files
    Sweep(SweepArgs),

    /// Run a single query and write one geolocation array
    Geo(GeoArgs),
}

// ============================================================================
// Sweep command
// ============================================================================

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Shodan API key (or set SHODAN_API_KEY env var)
    #[arg(short = 'k', long, env = "SHODAN_API_KEY")]
    pub api_key: String,

    /// Directory the report files are written to
    #[arg(short, long, default_value = "shodan_results")]
    pub output_dir: PathBuf,
}

// ============================================================================
// Geo command
// ============================================================================

#[derive(Args, Debug)]
pub struct GeoArgs {
    /// Shodan API key (or set SHODAN_API_KEY env var)
    #[arg(short = 'k', long, env = "SHODAN_API_KEY")]
    pub api_key: String,

    /// Shodan query to run (e.g., "ssh \"Astra Linux\"")
    pub query: String,

    /// Output file (defaults to geo_data_<timestamp>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
