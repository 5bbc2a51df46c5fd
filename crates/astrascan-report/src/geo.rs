//! Conversion from raw matches to geolocation records.

use astrascan_core::{GeoRecord, SearchMatch};

/// Convert matches to geolocation records, dropping matches without
/// usable coordinates.
///
/// Pure and order-preserving. The API reports (0, 0) for hosts it
/// cannot place, so those matches are treated as unlocated and skipped.
#[must_use]
pub fn to_geo_records(matches: &[SearchMatch]) -> Vec<GeoRecord> {
    matches
        .iter()
        .filter(|m| m.location.has_coordinates())
        .map(|m| GeoRecord {
            ip: m.ip_str.clone(),
            country: m.location.country_name.clone(),
            city: m.location.city.clone(),
            latitude: m.location.latitude,
            longitude: m.location.longitude,
            port: m.port,
            ssh_info: service_info(m),
            timestamp: m.timestamp.clone(),
        })
        .collect()
}

/// Compose the human-readable service line for a match
fn service_info(m: &SearchMatch) -> String {
    let mut info = format!("Product: {}, Version: {}", m.product, m.version);
    if let Some(ssh) = &m.ssh {
        info.push_str(&format!(", Type: {}", ssh.kind));
    }
    info
}
