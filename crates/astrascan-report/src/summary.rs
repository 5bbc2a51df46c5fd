//! Aggregate summary statistics over a completed sweep.

use astrascan_core::{FacetCount, GeoRecord, ScanSummary, SearchMatch};
use std::collections::{HashMap, HashSet};

/// Number of entries kept in each frequency table
const TOP_N: usize = 10;

/// Compute aggregate statistics over all matches from a run.
///
/// Frequency tables keep the ten most common entries, most frequent
/// first; ties order by ascending key, numerically for ports. Matches
/// with an empty product stay out of the product table, while an empty
/// country name still counts as a country.
#[must_use]
pub fn build_summary(
    queries: &[String],
    matches: &[SearchMatch],
    geo_records: &[GeoRecord],
    timestamp: &str,
) -> ScanSummary {
    let mut unique_ips = HashSet::new();
    let mut countries: HashMap<String, usize> = HashMap::new();
    let mut ports: HashMap<u16, usize> = HashMap::new();
    let mut products: HashMap<String, usize> = HashMap::new();

    for m in matches {
        unique_ips.insert(m.ip_str.as_str());
        *countries.entry(m.location.country_name.clone()).or_default() += 1;
        *ports.entry(m.port).or_default() += 1;
        if !m.product.is_empty() {
            *products.entry(m.product.clone()).or_default() += 1;
        }
    }

    ScanSummary {
        scan_timestamp: timestamp.to_string(),
        queries_executed: queries.len(),
        total_matches: matches.len(),
        unique_ips: unique_ips.len(),
        geolocated_hosts: geo_records.len(),
        countries_found: countries.len(),
        top_countries: top_n(countries, TOP_N),
        ports_found: top_n(ports, TOP_N),
        products_found: top_n(products, TOP_N),
        queries_used: queries.to_vec(),
    }
}

/// Reduce a frequency table to its `n` most common entries.
///
/// Entries sort by descending count, then ascending key, so the result
/// is deterministic regardless of map iteration order.
fn top_n<K: Ord + ToString>(counts: HashMap<K, usize>, n: usize) -> Vec<FacetCount> {
    let mut entries: Vec<(K, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(value, count)| FacetCount {
            value: value.to_string(),
            count,
        })
        .collect()
}
