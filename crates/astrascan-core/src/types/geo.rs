use serde::{Deserialize, Serialize};

/// Flattened, map-ready view of a located host.
///
/// One record per match that carried real coordinates; unlocated hosts
/// never become records. `ssh_info` is a prebuilt human-readable line so
/// downstream tooling can show it without reassembling banner fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRecord {
    /// IP address as string
    pub ip: String,

    /// Full country name
    pub country: String,

    /// City name
    pub city: String,

    /// Latitude coordinate
    pub latitude: f64,

    /// Longitude coordinate
    pub longitude: f64,

    /// Port the service was observed on
    pub port: u16,

    /// Human-readable service summary line
    pub ssh_info: String,

    /// Observation timestamp, as reported by the API
    pub timestamp: String,
}
