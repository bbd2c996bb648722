//! Image download over HTTP.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::{EngineError, EngineResult};

/// Fixed timeout applied to every image request. Exceeding it is a fetch
/// failure for that URL, not a hang.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP fetcher shared across a batch run.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
}

impl ImageFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout: Duration) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a fetcher with the standard 30 second timeout.
    pub fn with_default_timeout() -> EngineResult<Self> {
        Self::new(FETCH_TIMEOUT)
    }

    /// Download the raw bytes at `url`.
    ///
    /// Malformed URLs, connection failures, timeouts, and non-2xx statuses
    /// all surface as `Network` failures for this URL.
    pub async fn fetch(&self, url: &str) -> EngineResult<Vec<u8>> {
        let parsed =
            Url::parse(url).map_err(|e| EngineError::network(url, format!("invalid URL: {}", e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| EngineError::network(url, e.to_string()))?
            .error_for_status()
            .map_err(|e| EngineError::network(url, e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EngineError::network(url, e.to_string()))?;

        debug!(url = %url, size = bytes.len(), "fetched image");
        Ok(bytes.to_vec())
    }
}
