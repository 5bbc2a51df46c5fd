//! Sweep orchestration: drives the query list and persists the reports.

use std::fs;
use std::path::{Path, PathBuf};

use astrascan_client::SearchClient;
use astrascan_core::{
    CombinedReport, GeoRecord, QueryReport, Result, SearchMatch, SweepError,
};
use astrascan_report::{build_summary, sanitize_filename, save_json, to_geo_records};
use tracing::{debug, error};

/// What a completed sweep produced, for the final console block
#[derive(Debug)]
pub struct SweepOutcome {
    /// Number of queries attempted
    pub queries_executed: usize,

    /// Queries that failed or could not be persisted
    pub failed_queries: usize,

    /// Matches accumulated across all persisted queries
    pub total_matches: usize,

    /// Geo records accumulated across all persisted queries
    pub geolocated_hosts: usize,

    /// Directory the report files were written to
    pub output_dir: PathBuf,

    /// Path of the combined-results file
    pub combined_path: PathBuf,

    /// Path of the geo-data file
    pub geo_path: PathBuf,

    /// Path of the summary file
    pub summary_path: PathBuf,
}

/// Runs the configured queries sequentially and writes every report file.
pub struct SweepRunner {
    client: SearchClient,
    config: crate::config::SweepConfig,
}

impl SweepRunner {
    /// Create a runner over a client and a sweep configuration
    #[must_use]
    pub fn new(client: SearchClient, config: crate::config::SweepConfig) -> Self {
        Self { client, config }
    }

    /// Execute the sweep.
    ///
    /// Queries run strictly one after another with a pause between
    /// successfully-processed ones. A query that fails to search or to
    /// persist contributes nothing to the combined collections and does
    /// not stop the run. Failure to create the output directory or to
    /// write any of the three aggregate files is fatal.
    pub async fn run(&self) -> Result<SweepOutcome> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| SweepError::Io {
            path: output_dir.clone(),
            source,
        })?;

        let timestamp = run_timestamp();
        let queries = &self.config.queries;

        let mut all_matches: Vec<SearchMatch> = Vec::new();
        let mut all_geo: Vec<GeoRecord> = Vec::new();
        let mut failed_queries = 0usize;

        for (i, query) in queries.iter().enumerate() {
            println!("Running query {}/{}: {}", i + 1, queries.len(), query);

            let results = match self.client.search_all(query).await {
                Ok(results) => results,
                Err(e) => {
                    error!(query = %query, error = %e, "query failed");
                    failed_queries += 1;
                    continue;
                }
            };

            println!(
                "Query: {} - Found {} total results, retrieved {} matches",
                query,
                results.total,
                results.len()
            );

            // Persist this query's results before they join the aggregate.
            let file_name = format!("query_{:02}_{}.json", i + 1, sanitize_filename(query));
            let query_path = output_dir.join(file_name);
            let report = QueryReport {
                query: query.clone(),
                timestamp: timestamp.clone(),
                total: results.total,
                matches: results.matches,
            };
            if let Err(e) = save_json(&report, &query_path) {
                error!(query = %query, error = %e, "failed to save query results");
                failed_queries += 1;
                continue;
            }

            all_geo.extend(to_geo_records(&report.matches));
            all_matches.extend(report.matches);

            if i + 1 < queries.len() {
                debug!(delay = ?self.config.query_delay, "pausing before next query");
                tokio::time::sleep(self.config.query_delay).await;
            }
        }

        let combined = CombinedReport {
            scan_timestamp: timestamp.clone(),
            total_queries: queries.len(),
            total_matches: all_matches.len(),
            queries_run: queries.clone(),
            all_matches,
        };
        let combined_path = output_dir.join(format!("combined_results_{timestamp}.json"));
        save_json(&combined, &combined_path)?;

        let geo_path = output_dir.join(format!("geo_data_{timestamp}.json"));
        save_json(&all_geo, &geo_path)?;

        let summary = build_summary(queries, &combined.all_matches, &all_geo, &timestamp);
        let summary_path = output_dir.join(format!("scan_summary_{timestamp}.json"));
        save_json(&summary, &summary_path)?;

        Ok(SweepOutcome {
            queries_executed: queries.len(),
            failed_queries,
            total_matches: combined.total_matches,
            geolocated_hosts: all_geo.len(),
            output_dir: output_dir.clone(),
            combined_path,
            geo_path,
            summary_path,
        })
    }
}

/// Run one query and write its geo records as a flat JSON array.
///
/// The single-file counterpart to [`SweepRunner::run`]: the written
/// array is the run's only deliverable, so any failure is fatal.
pub async fn write_geo_report(
    client: &SearchClient,
    query: &str,
    output: &Path,
) -> Result<usize> {
    let results = client.search_all(query).await?;
    println!(
        "Query: {} - Found {} total results, retrieved {} matches",
        query,
        results.total,
        results.len()
    );

    let records = to_geo_records(&results.matches);
    save_json(&records, output)?;
    Ok(records.len())
}

/// Run timestamp shared by every artifact of a sweep
#[must_use]
pub fn run_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
