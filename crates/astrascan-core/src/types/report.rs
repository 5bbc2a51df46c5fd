use serde::{Deserialize, Serialize};

use crate::types::SearchMatch;

/// Per-query report persisted immediately after a query completes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReport {
    /// The query string that was executed
    pub query: String,

    /// Run timestamp shared by every file in the sweep
    pub timestamp: String,

    /// Total number of results the server reported
    pub total: u64,

    /// Matches actually retrieved for this query
    pub matches: Vec<SearchMatch>,
}

/// Aggregate of every successfully persisted query in a sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedReport {
    /// Run timestamp shared by every file in the sweep
    pub scan_timestamp: String,

    /// Number of queries attempted
    pub total_queries: usize,

    /// Number of matches accumulated across queries
    pub total_matches: usize,

    /// The query strings that were attempted
    pub queries_run: Vec<String>,

    /// Accumulated matches, in query order
    pub all_matches: Vec<SearchMatch>,
}

/// One entry in a ranked frequency table.
///
/// Serialized as an array element rather than a map key so the ranking
/// order survives the trip through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    /// The counted value (country name, port rendered as string, product)
    pub value: String,

    /// Number of matches carrying that value
    pub count: usize,
}

/// High-level statistics for a completed sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Run timestamp shared by every file in the sweep
    pub scan_timestamp: String,

    /// Number of queries attempted
    pub queries_executed: usize,

    /// Number of matches accumulated across queries
    pub total_matches: usize,

    /// Distinct IP addresses seen
    pub unique_ips: usize,

    /// Matches that carried usable coordinates
    pub geolocated_hosts: usize,

    /// Distinct country names seen
    pub countries_found: usize,

    /// Up to ten most common countries, most frequent first
    pub top_countries: Vec<FacetCount>,

    /// Up to ten most common ports, most frequent first
    pub ports_found: Vec<FacetCount>,

    /// Up to ten most common products, most frequent first
    pub products_found: Vec<FacetCount>,

    /// The query strings that were attempted
    pub queries_used: Vec<String>,
}
