// Feed HTTP client.
// One GET per operation, no retries; the caller decides what to do on failure.

use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{Result, TemblorError};

use super::types::Snapshot;

/// Monthly summary feed covering all magnitudes.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

/// HTTP client for the earthquake feed and per-event detail documents.
pub struct FeedClient {
    client: Client,
    feed_url: String,
}

impl FeedClient {
    /// Create a client for the given feed URL.
    pub fn new(feed_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("temblor-cli"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(TemblorError::Transport)?;

        Ok(Self {
            client,
            feed_url: feed_url.into(),
        })
    }

    /// Fetch the summary feed and parse it into a snapshot.
    pub async fn fetch_feed(&self) -> Result<Snapshot> {
        let body = self.get_text(&self.feed_url).await?;
        serde_json::from_str(&body).map_err(TemblorError::Parse)
    }

    /// Fetch one event's detail document. The body is validated as JSON and
    /// returned verbatim so it can be persisted unmodified.
    pub async fn fetch_detail(&self, url: &str) -> Result<String> {
        let body = self.get_text(url).await?;
        serde_json::from_str::<serde_json::Value>(&body).map_err(TemblorError::Parse)?;
        Ok(body)
    }

    /// GET a URL, failing on connection errors and non-2xx statuses.
    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TemblorError::Transport)?
            .error_for_status()
            .map_err(TemblorError::Transport)?;

        response.text().await.map_err(TemblorError::Transport)
    }
}
