//! HTTP client for directory pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// User agent presented during redirect resolution, mimicking a plain browser.
const REDIRECT_PROBE_UA: &str = "Mozilla/5.0";

/// HTTP client for search-result and detail pages.
///
/// Fetches are single-shot: a failed request surfaces as a typed error and is
/// not retried — the caller decides whether to skip the listing or stop.
#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
}

impl DirectoryClient {
    /// Creates a `DirectoryClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a page body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — network or TLS failure, or body decode failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }

    /// Follows redirects from `url` and returns the final URL.
    ///
    /// A found candidate is never discarded over a network failure: any
    /// request-level error returns `url` unchanged.
    pub async fn final_url(&self, url: &str) -> String {
        match self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, REDIRECT_PROBE_UA)
            .send()
            .await
        {
            Ok(response) => response.url().to_string(),
            Err(e) => {
                tracing::debug!(url, error = %e, "redirect resolution failed; keeping candidate");
                url.to_owned()
            }
        }
    }
}
