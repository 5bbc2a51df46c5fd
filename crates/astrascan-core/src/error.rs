use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors that can occur during a sweep
#[derive(Error, Debug)]
pub enum SweepError {
    /// Authentication failed - invalid or missing API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimited,

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message or raw body from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A search failed, with the query and page that caused it
    #[error("search failed for query {query:?} on page {page}: {source}")]
    Search {
        /// The query being run
        query: String,
        /// 1-based page the failure occurred on
        page: u32,
        /// The underlying failure
        source: Box<SweepError>,
    },

    /// Filesystem read/write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the operation failed on
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl SweepError {
    /// Wrap this error with the query and page it occurred on
    #[must_use]
    pub fn with_search_context(self, query: &str, page: u32) -> Self {
        Self::Search {
            query: query.to_string(),
            page,
            source: Box::new(self),
        }
    }

    /// Returns the HTTP status code if this is an API-level error
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited => Some(429),
            Self::Api { code, .. } => Some(*code),
            Self::Search { source, .. } => source.status_code(),
            _ => None,
        }
    }
}
