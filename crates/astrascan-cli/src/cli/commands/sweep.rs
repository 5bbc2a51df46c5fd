//! `astrascan sweep` - run the full built-in query sweep.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::args::SweepArgs;
use crate::config::SweepConfig;
use crate::runner::SweepRunner;
use astrascan_client::SearchClient;

pub async fn execute(args: SweepArgs) -> Result<()> {
    let client = SearchClient::new(&args.api_key);
    let config = SweepConfig::new(args.output_dir);
    let runner = SweepRunner::new(client, config);

    let outcome = runner.run().await?;

    println!();
    println!("{}", "=== SCAN COMPLETE ===".bold());
    println!(
        "Total queries executed: {}",
        outcome.queries_executed.to_string().cyan()
    );
    if outcome.failed_queries > 0 {
        println!(
            "Failed queries: {}",
            outcome.failed_queries.to_string().red()
        );
    }
    println!(
        "Total matches found: {}",
        outcome.total_matches.to_string().cyan()
    );
    println!(
        "Unique geolocated hosts: {}",
        outcome.geolocated_hosts.to_string().cyan()
    );
    println!();
    println!("Results saved to '{}':", outcome.output_dir.display());
    println!("- Individual query results: query_XX_*.json");
    println!("- Combined results: {}", base_name(&outcome.combined_path));
    println!("- Geo mapping data: {}", base_name(&outcome.geo_path));
    println!("- Scan summary: {}", base_name(&outcome.summary_path));

    Ok(())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
}
