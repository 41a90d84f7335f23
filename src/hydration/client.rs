//! HTTP client for the remote read endpoints.

use serde::Deserialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::store::Trip;

/// Errors from a hydration read.
#[derive(Debug, Error)]
pub enum HydrationError {
    /// The request never produced a response.
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("endpoint '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A raw country row as served by the country endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    pub value: String,
    pub label: String,
}

/// Read-only client for the trip and country endpoints.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with the configured timeouts.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full trip collection. The result is used verbatim.
    pub async fn fetch_trips(&self) -> Result<Vec<Trip>, HydrationError> {
        self.get_json("/trip").await
    }

    /// Fetch the raw country rows. Sorting and class derivation happen in
    /// the hydration routine, not here.
    pub async fn fetch_countries(&self) -> Result<Vec<CountryEntry>, HydrationError> {
        self.get_json("/country").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, HydrationError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HydrationError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HydrationError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| HydrationError::Decode { url, source: e })
    }
}
