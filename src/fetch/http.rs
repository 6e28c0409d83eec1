//! HTTP resource fetching.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Fetches template and behavior resources over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("fresco")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a resource, treating any non-success status as an error.
    pub fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let fetcher = HttpFetcher::new();
        assert_eq!(fetcher.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(60));
        assert_eq!(fetcher.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn fetch_returns_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/templates/page.tera");
            then.status(200).body("<p>{{ title }}</p>");
        });

        let fetcher = HttpFetcher::new();
        let body = fetcher.fetch(&server.url("/templates/page.tera")).unwrap();
        assert_eq!(body, "<p>{{ title }}</p>");
    }

    #[test]
    fn fetch_returns_error_on_404() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.tera");
            then.status(404).body("Not Found");
        });

        let fetcher = HttpFetcher::new();
        let err = fetcher
            .fetch(&server.url("/missing.tera"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("404"), "Error should mention 404: {}", err);
    }

    #[test]
    fn fetch_returns_error_on_500() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/error.tera");
            then.status(500).body("Internal Server Error");
        });

        let fetcher = HttpFetcher::new();
        let err = fetcher
            .fetch(&server.url("/error.tera"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("500"), "Error should mention 500: {}", err);
    }
}
