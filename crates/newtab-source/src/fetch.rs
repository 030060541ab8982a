use async_trait::async_trait;
use newtab_model::AdviceFetchError;
use serde_json::Value;

/// Seam between the page loader and the network layer.
///
/// Implementations resolve a URL to a parsed JSON payload. Tests inject a
/// canned implementation; production uses [`HttpFetcher`].
#[async_trait]
pub trait AdviceFetch: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value, AdviceFetchError>;
}

/// reqwest-backed fetcher.
///
/// No timeout is configured: a hung upstream leaves the display target in
/// its pre-load state, matching the page's acknowledged behavior.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, AdviceFetchError> {
        let client = reqwest::Client::builder()
            .user_agent("newtab/0.1 (start-page content loader)")
            .build()
            .map_err(|e| AdviceFetchError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AdviceFetch for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, AdviceFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AdviceFetchError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdviceFetchError::Body(e.to_string()))?;
        tracing::debug!(url, %status, bytes = body.len(), "Received advice response");

        // The status is deliberately not checked: only JSON parse success
        // matters, and an error page that parses is handled downstream.
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
