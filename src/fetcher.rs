//! HTTP fetcher for downloading host lists and the source manifest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use crate::error::HostsinkError;

/// Maximum size per fetched list (10 MB). The largest widely used host
/// list is around 5 MB, so this leaves ample margin while bounding memory.
const MAX_LIST_SIZE: usize = 10 * 1024 * 1024;

/// Abstraction over list retrieval so the pipeline can be driven by an
/// in-memory stub in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the full body at `url` as text.
    ///
    /// Any failure (network error, timeout, non-success status) maps to
    /// [`HostsinkError::Fetch`]; callers decide whether that is fatal.
    async fn fetch(&self, url: &str) -> Result<String, HostsinkError>;
}

/// Production fetcher over reqwest with rustls.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given per-request timeout.
    ///
    /// No retries are performed: a source that fails stays dropped for the
    /// run and is picked up again on the next scheduled invocation.
    pub fn new(timeout: Duration) -> Result<Self, HostsinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("hostsink/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HostsinkError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, HostsinkError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HostsinkError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HostsinkError::fetch(url, format!("HTTP {}", status)));
        }

        if let Some(length) = response.content_length() {
            if length as usize > MAX_LIST_SIZE {
                return Err(HostsinkError::fetch(
                    url,
                    format!("response too large: {} bytes (max {})", length, MAX_LIST_SIZE),
                ));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| HostsinkError::fetch(url, e))?;

        // Content-Length is optional, so re-check the actual size.
        if body.len() > MAX_LIST_SIZE {
            return Err(HostsinkError::fetch(
                url,
                format!("downloaded {} bytes (max {})", body.len(), MAX_LIST_SIZE),
            ));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_with_timeout() {
        assert!(HttpFetcher::new(Duration::from_secs(30)).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_connection_error_is_fetch_variant() {
        // Reserved TEST-NET-1 address; nothing listens there.
        let fetcher = HttpFetcher::new(Duration::from_millis(50)).unwrap();
        let result = fetcher.fetch("http://192.0.2.1:9/list.txt").await;
        match result {
            Err(HostsinkError::Fetch { url, .. }) => {
                assert_eq!(url, "http://192.0.2.1:9/list.txt");
            }
            other => panic!("Expected Fetch error, got {:?}", other.map(|b| b.len())),
        }
    }

    #[tokio::test]
    async fn test_mock_fetch() {
        let mut mock = MockFetch::new();
        mock.expect_fetch()
            .returning(|_| Ok("0.0.0.0 ads.example.com\n".to_string()));
        let body = mock.fetch("https://example.com/hosts").await.unwrap();
        assert!(body.contains("ads.example.com"));
    }
}
