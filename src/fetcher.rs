//! HTTP fetching over a shared connection context
//!
//! One [`Fetcher`] wraps one pooled `reqwest::Client`, created at startup and
//! shared read-only by every reporter task. Each fetch is a single GET with
//! no retry; a non-success status is fatal to the calling task only.

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use tracing::debug;
use url::Url;

/// HTTP fetcher over a shared, pooled client
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a new fetcher
    ///
    /// Builds the pooled HTTP client from the given settings. The client is
    /// the process-wide shared connection context; create one `Fetcher` and
    /// share it across tasks.
    ///
    /// # Errors
    /// Returns `Error::Config` if the HTTP client cannot be created.
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&http.user_agent);
        if let Some(timeout) = http.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::Config {
            message: format!("failed to create HTTP client: {}", e),
            key: Some("http".to_string()),
        })?;

        Ok(Self { client })
    }

    /// Fetch the full response body for a URL
    ///
    /// Issues exactly one GET request; awaiting the response is the calling
    /// task's suspension point. Returns the body bytes when the status is
    /// success, `Error::UnexpectedStatus` otherwise. No retry is performed.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        debug!(%url, "fetching");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(%url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}
