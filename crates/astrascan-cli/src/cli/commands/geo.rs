//! `astrascan geo` - run a single query and write one geolocation array.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::GeoArgs;
use crate::runner::{run_timestamp, write_geo_report};
use astrascan_client::SearchClient;

pub async fn execute(args: GeoArgs) -> Result<()> {
    let client = SearchClient::new(&args.api_key);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("geo_data_{}.json", run_timestamp())));

    println!("Running query: {}", args.query);
    let records = write_geo_report(&client, &args.query, &output).await?;

    println!(
        "Saved {} geolocated hosts to '{}'",
        records.to_string().cyan(),
        output.display()
    );

    Ok(())
}
