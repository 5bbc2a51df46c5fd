//! Sweep configuration: the built-in query list and run settings.

use std::path::PathBuf;
use std::time::Duration;

/// Search queries targeting Astra Linux exposure, run in this order
pub const ASTRA_QUERIES: [&str; 12] = [
    "10+deb9u6astra6",                                  // specific package version
    "ssh \"Astra Linux\"",                              // SSH banner containing Astra Linux
    "ssh banner:\"astra\"",                             // SSH banner with astra keyword
    "ssh banner:\"AstraLinux\"",                        // SSH banner with AstraLinux keyword
    "\"Astra Linux\" port:22",                          // port 22 with Astra Linux
    "\"astra\" \"debian\" port:22",                     // Astra with Debian on SSH
    "\"orel\" \"astra\"",                               // Orel is the free Astra edition
    "product:\"OpenSSH\" \"astra\"",                    // OpenSSH with astra
    "\"SE Linux\" \"astra\"",                           // Astra ships a SELinux-style MAC
    "\"Red OS\" OR \"Astra Linux\" OR \"astra linux\"", // name variants
    "\"astra.ru\"",                                     // Astra domain references
    "\"astralinux.ru\"",                                // AstraLinux domain
];

/// Pause between successive queries
const DEFAULT_QUERY_DELAY: Duration = Duration::from_secs(2);

/// Settings for one sweep run.
///
/// Loaded once at process start and handed to the runner whole; nothing
/// here changes during a run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Directory the report files are written to
    pub output_dir: PathBuf,

    /// Queries to run, in order
    pub queries: Vec<String>,

    /// Pause between successive queries
    pub query_delay: Duration,
}

impl SweepConfig {
    /// Create a config running the built-in query list
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            queries: ASTRA_QUERIES.iter().map(ToString::to_string).collect(),
            query_delay: DEFAULT_QUERY_DELAY,
        }
    }

    /// Replace the query list (useful for testing)
    #[must_use]
    pub fn with_queries(mut self, queries: Vec<String>) -> Self {
        self.queries = queries;
        self
    }

    /// Replace the pause between queries (useful for testing)
    #[must_use]
    pub fn with_query_delay(mut self, delay: Duration) -> Self {
        self.query_delay = delay;
        self
    }
}
