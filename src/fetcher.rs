//! Content fetcher for the monitored page
//!
//! One plain GET per run. The request carries a browser-like user agent
//! because vacancy listings are frequently served by sites that refuse
//! default library user agents.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Default timeout for the page fetch in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Browser-like user agent sent with the page request
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fetches raw page markup over HTTP
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the page body as text
    ///
    /// A transport failure, a timeout, or a non-success status all map to
    /// [`Error::Fetch`]; the run has no partial result to continue with.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching webpage: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "Request to {} returned status {}",
                url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read body from {}: {}", url, e)))?;

        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/vacancies")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>Rooms</body></html>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = PageFetcher::default();
        let body = fetcher
            .fetch(&format!("{}/vacancies", server.url()))
            .await
            .unwrap();
        assert!(body.contains("Rooms"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/vacancies")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("ok")
            .expect(1)
            .create_async()
            .await;

        let fetcher = PageFetcher::default();
        fetcher
            .fetch(&format!("{}/vacancies", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/vacancies")
            .with_status(503)
            .with_body("down for maintenance")
            .create_async()
            .await;

        let fetcher = PageFetcher::default();
        let result = fetcher.fetch(&format!("{}/vacancies", server.url())).await;
        match result {
            Err(Error::Fetch(msg)) => assert!(msg.contains("503")),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_error() {
        let fetcher = PageFetcher::new(Duration::from_millis(500));
        // Port 1 is essentially guaranteed to refuse connections
        let result = fetcher.fetch("http://127.0.0.1:1/vacancies").await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
