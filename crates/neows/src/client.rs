//! HTTP client for the NeoWs feed.
//!
//! [`Client`] builds a [`FeedQuery`], performs one blocking GET, buffers the
//! body and hands it to [`decode`]. Nothing is retried or cached and the
//! client keeps no state between calls.

use crate::decode::decode;
use crate::error::{Error, Result};
use crate::query::{FEED_URL, FeedQuery};
use crate::types::NearEarthObject;

/// User agent for API requests.
const USER_AGENT: &str = concat!("neows/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the close-approach feed.
///
/// # Example
///
/// ```ignore
/// let client = neows::Client::new()?;
/// let neos = client.fetch("2023-01-01", "2023-01-02", "")?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Client {
    /// Create a client with the crate's user agent and the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Transport {
                url: FEED_URL.to_string(),
                message: format!("failed to create client: {e}"),
            })?;
        Ok(Self::with_http(http))
    }

    /// Create a client around a caller-configured HTTP client.
    ///
    /// Use this to set a timeout or proxy; the client applies no deadline of
    /// its own.
    #[must_use]
    pub fn with_http(http: reqwest::blocking::Client) -> Self {
        Self {
            http,
            base_url: FEED_URL.to_string(),
        }
    }

    /// Set a custom endpoint for testing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// The endpoint queries are built against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every object with a close approach in the given window.
    ///
    /// An invalid `start_date` fails before any request is made. See
    /// [`FeedQuery::build`] for how `end_date` and `api_key` are defaulted.
    pub fn fetch(
        &self,
        start_date: &str,
        end_date: &str,
        api_key: &str,
    ) -> Result<Vec<NearEarthObject>> {
        let query = FeedQuery::build_with_base(&self.base_url, start_date, end_date, api_key)?;
        self.fetch_query(&query)
    }

    /// Issue an already-built query.
    pub fn fetch_query(&self, query: &FeedQuery) -> Result<Vec<NearEarthObject>> {
        let body = self.fetch_bytes(query)?;
        decode(&body)
    }

    /// Fetch the raw response body.
    fn fetch_bytes(&self, query: &FeedQuery) -> Result<Vec<u8>> {
        // The URL carries the API key; log the endpoint and dates only.
        tracing::debug!(
            url = %self.base_url,
            start_date = %query.start_date(),
            end_date = ?query.end_date(),
            "fetching"
        );

        let response = self
            .http
            .get(query.url().clone())
            .send()
            .map_err(|e| Error::Transport {
                url: self.base_url.clone(),
                message: e.to_string(),
            })?;

        // The feed answers 200 with a body; anything else is a failure.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::HttpStatus {
                url: self.base_url.clone(),
                status: status.as_u16(),
            });
        }

        let data = response.bytes().map_err(|e| Error::Transport {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(status = status.as_u16(), bytes = data.len(), "received");
        Ok(data.to_vec())
    }
}
