//! Paginated search against /shodan/host/search.

use crate::SearchClient;
use astrascan_core::{Result, SearchResults};
use tracing::{debug, info};

/// Number of matches the API returns per full page
pub const PAGE_SIZE: usize = 100;

/// Path of the host search endpoint
const SEARCH_PATH: &str = "/shodan/host/search";

impl SearchClient {
    /// Fetch a single page of search results (1-indexed)
    pub async fn search_page(&self, query: &str, page: u32) -> Result<SearchResults> {
        let page_str = page.to_string();
        self.get_with_query(SEARCH_PATH, &[("query", query), ("page", &page_str)])
            .await
    }

    /// Fetch every available page of results for a query.
    ///
    /// Pages are requested sequentially starting at page 1, with a short
    /// pause between requests. Paging stops when a page comes back short
    /// or the accumulated matches reach the server-reported total.
    /// Accounts capped below the full result set produce a partial set;
    /// that is not an error. A failure on any page aborts the query and
    /// carries the query string and page number in the error.
    pub async fn search_all(&self, query: &str) -> Result<SearchResults> {
        let mut matches = Vec::new();
        let mut total = 0u64;
        let mut page = 1u32;

        loop {
            let results = self
                .search_page(query, page)
                .await
                .map_err(|e| e.with_search_context(query, page))?;

            if page == 1 {
                total = results.total;
                info!(query = %query, total, "search started");
            }

            let fetched = results.matches.len();
            matches.extend(results.matches);
            debug!(
                query = %query,
                page,
                fetched,
                accumulated = matches.len(),
                "page retrieved"
            );

            if fetched < PAGE_SIZE || matches.len() as u64 >= total {
                break;
            }

            page += 1;
            tokio::time::sleep(self.page_delay()).await;
        }

        if (matches.len() as u64) < total {
            info!(
                query = %query,
                retrieved = matches.len(),
                total,
                "retrieved fewer matches than reported total"
            );
        }

        Ok(SearchResults { matches, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrascan_core::SweepError;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> SearchClient {
        SearchClient::builder("TESTKEY")
            .base_url(server.uri())
            .page_delay(Duration::ZERO)
            .build()
    }

    fn match_json(ip: &str, port: u16) -> serde_json::Value {
        json!({"ip_str": ip, "port": port})
    }

    fn page_json(count: usize, total: u64) -> serde_json::Value {
        let matches: Vec<_> = (0..count)
            .map(|i| match_json(&format!("192.0.2.{}", i % 254 + 1), 22))
            .collect();
        json!({"matches": matches, "total": total})
    }

    async fn mount_page(server: &MockServer, page: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("key", "TESTKEY"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_search_all_stops_on_short_page() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_json(100, 250)).await;
        mount_page(&server, "2", page_json(100, 250)).await;
        mount_page(&server, "3", page_json(50, 250)).await;

        let results = test_client(&server).search_all("port:22").await.unwrap();
        assert_eq!(results.len(), 250);
        assert_eq!(results.total, 250);
        assert!(!results.is_partial());
    }

    #[tokio::test]
    async fn test_search_all_stops_at_reported_total() {
        // Two full pages cover the total exactly; a third request would
        // hit no mock and fail the query.
        let server = MockServer::start().await;
        mount_page(&server, "1", page_json(100, 200)).await;
        mount_page(&server, "2", page_json(100, 200)).await;

        let results = test_client(&server).search_all("port:22").await.unwrap();
        assert_eq!(results.len(), 200);
        assert!(!results.is_partial());
    }

    #[tokio::test]
    async fn test_search_all_accepts_partial_results() {
        // The API stops serving results before the reported total, as it
        // does for accounts with a retrieval cap.
        let server = MockServer::start().await;
        mount_page(&server, "1", page_json(100, 500)).await;
        mount_page(&server, "2", page_json(30, 500)).await;

        let results = test_client(&server).search_all("port:22").await.unwrap();
        assert_eq!(results.len(), 130);
        assert_eq!(results.total, 500);
        assert!(results.is_partial());
    }

    #[tokio::test]
    async fn test_search_all_single_page() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_json(2, 2)).await;

        let results = test_client(&server).search_all("port:22").await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_all_wraps_mid_query_error() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_json(100, 300)).await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "upstream boom"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .search_all("port:22")
            .await
            .unwrap_err();
        match err {
            SweepError::Search { query, page, source } => {
                assert_eq!(query, "port:22");
                assert_eq!(page, 2);
                assert!(source.to_string().contains("upstream boom"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_includes_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("access denied"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .search_page("port:22", 1)
            .await
            .unwrap_err();
        match err {
            SweepError::Api { code, message } => {
                assert_eq!(code, 403);
                assert_eq!(message, "access denied");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key"})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .search_page("port:22", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, SweepError::Unauthorized));
        assert_eq!(err.status_code(), Some(401));
    }

    #[tokio::test]
    async fn test_rate_limited_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"error": "rate limit reached"})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .search_page("port:22", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, SweepError::RateLimited));
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .search_page("port:22", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, SweepError::Json(_)));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page_json(1, 1))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        let client = SearchClient::builder("TESTKEY")
            .base_url(server.uri())
            .timeout(Duration::from_millis(100))
            .build();
        let err = client.search_page("port:22", 1).await.unwrap_err();
        assert!(matches!(err, SweepError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_query_is_form_encoded() {
        // The matcher compares decoded parameter values, so this only
        // passes if the query survived encoding intact.
        let query = r#"product:"OpenSSH" port:22"#;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("query", query))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1, 1)))
            .expect(1)
            .mount(&server)
            .await;

        let results = test_client(&server).search_page(query, 1).await.unwrap();
        assert_eq!(results.len(), 1);
    }
}
