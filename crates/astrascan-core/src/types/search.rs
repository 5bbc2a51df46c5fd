use serde::{Deserialize, Serialize};

/// Search results from /shodan/host/search.
///
/// Doubles as the shape of a single page and, once pages are aggregated,
/// of a complete query outcome: `total` is always the server-reported
/// count, which can exceed `matches.len()` when the account's retrieval
/// cap cuts paging short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching banners/services, in server order
    pub matches: Vec<SearchMatch>,

    /// Total number of results the server knows about
    pub total: u64,
}

impl SearchResults {
    /// Returns true if there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the number of matches actually retrieved
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if fewer matches were retrieved than the server reports
    #[must_use]
    pub fn is_partial(&self) -> bool {
        (self.matches.len() as u64) < self.total
    }
}

/// Individual match in search results.
///
/// String fields the API omits decode as empty, numeric fields as zero,
/// mirroring the upstream JSON where absent and empty are interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// IP address as string
    pub ip_str: String,

    /// Port number
    pub port: u16,

    /// Geographic location
    #[serde(default)]
    pub location: HostLocation,

    /// Raw banner data
    #[serde(default)]
    pub data: String,

    /// Product name
    #[serde(default)]
    pub product: String,

    /// Product version
    #[serde(default)]
    pub version: String,

    /// Observation timestamp, as reported by the API
    #[serde(default)]
    pub timestamp: String,

    /// SSH handshake details, present only for SSH services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshInfo>,
}

/// Geographic location information attached to a match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostLocation {
    /// Full country name
    #[serde(default)]
    pub country_name: String,

    /// Two-letter country code (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country_code: String,

    /// City name
    #[serde(default)]
    pub city: String,

    /// Latitude coordinate
    #[serde(default)]
    pub latitude: f64,

    /// Longitude coordinate
    #[serde(default)]
    pub longitude: f64,
}

impl HostLocation {
    /// Returns true if the location carries usable coordinates.
    ///
    /// The API reports (0, 0) when it has no position for a host, so a
    /// host genuinely anchored at (0, 0) is indistinguishable from an
    /// unlocated one and reads as not having coordinates.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

/// SSH handshake fields attached to a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshInfo {
    /// Key type negotiated during the handshake
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Host key fingerprint
    #[serde(default)]
    pub fingerprint: String,

    /// Negotiated cipher
    #[serde(default)]
    pub cipher: String,

    /// Negotiated MAC algorithm
    #[serde(default)]
    pub mac: String,

    /// Base64-encoded host key
    #[serde(default)]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_decodes_with_missing_fields() {
        let body = r#"{"ip_str": "198.51.100.7", "port": 22}"#;
        let m: SearchMatch = serde_json::from_str(body).unwrap();
        assert_eq!(m.ip_str, "198.51.100.7");
        assert_eq!(m.port, 22);
        assert_eq!(m.product, "");
        assert!(!m.location.has_coordinates());
        assert!(m.ssh.is_none());
    }

    #[test]
    fn test_match_roundtrips_ssh_block() {
        let body = r#"{
            "ip_str": "198.51.100.7",
            "port": 22,
            "location": {"country_name": "Germany", "country_code": "DE",
                         "city": "Berlin", "latitude": 52.52, "longitude": 13.405},
            "data": "SSH-2.0-OpenSSH_7.4",
            "product": "OpenSSH",
            "version": "7.4",
            "timestamp": "2024-05-02T12:00:00.000000",
            "ssh": {"type": "ssh-rsa", "fingerprint": "ab:cd", "cipher": "aes128-ctr",
                    "mac": "hmac-sha2-256", "key": "AAAA"}
        }"#;
        let m: SearchMatch = serde_json::from_str(body).unwrap();
        assert_eq!(m.ssh.as_ref().unwrap().kind, "ssh-rsa");
        assert!(m.location.has_coordinates());

        let out = serde_json::to_value(&m).unwrap();
        assert_eq!(out["ssh"]["type"], "ssh-rsa");
    }

    #[test]
    fn test_ssh_block_omitted_when_absent() {
        let m = SearchMatch {
            ip_str: "203.0.113.9".to_string(),
            port: 2222,
            location: HostLocation::default(),
            data: String::new(),
            product: String::new(),
            version: String::new(),
            timestamp: String::new(),
            ssh: None,
        };
        let out = serde_json::to_value(&m).unwrap();
        assert!(out.get("ssh").is_none());
    }

    #[test]
    fn test_results_partial_flag() {
        let results = SearchResults {
            matches: Vec::new(),
            total: 12,
        };
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
        assert!(results.is_partial());
    }
}
