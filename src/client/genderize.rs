//! HTTP client for the genderize.io prediction API.
//!
//! One GET per lookup with the name as a query parameter. The contract has
//! no client-enforced timeout and no retry; a hung request stays in flight
//! until the transport gives up on its own.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::client::{Prediction, Predictor};
use crate::error::{NamecastError, Result};
use crate::validate::ValidName;

/// Public prediction API base.
const GENDERIZE_API_BASE: &str = "https://api.genderize.io";

/// Client for the name-to-gender prediction service.
#[derive(Debug, Clone)]
pub struct GenderizeClient {
    client: Client,
    base_url: String,
}

impl GenderizeClient {
    /// Client against the public genderize.io endpoint.
    pub fn new() -> Self {
        Self::with_base_url(GENDERIZE_API_BASE)
    }

    /// Client against a custom endpoint (tests, self-hosted deployments).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GenderizeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Predictor for GenderizeClient {
    /// Look up the predicted gender for a name.
    ///
    /// Transport failures and non-2xx statuses map to
    /// [`NamecastError::Network`]; an unknown name comes back as a normal
    /// [`Prediction`] with `gender: None`.
    async fn predict(&self, name: &ValidName) -> Result<Prediction> {
        debug!(name = %name, "Requesting gender prediction");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", name.as_str())])
            .send()
            .await
            .map_err(|e| NamecastError::Network(format!("request failed: {}", e)))?;

        if response.status().is_success() {
            return response.json::<Prediction>().await.map_err(|e| {
                NamecastError::Network(format!("failed to parse prediction response: {}", e))
            });
        }

        let status = response.status().as_u16();
        let error_text = response.text().await.unwrap_or_default();

        // Try to extract a useful message from the genderize error body,
        // e.g. {"error": "Request limit reached"} on 429.
        let body_msg = serde_json::from_str::<Value>(&error_text)
            .ok()
            .and_then(|v| v["error"].as_str().map(String::from))
            .unwrap_or(error_text);

        Err(NamecastError::Network(format!(
            "prediction service returned HTTP {}: {}",
            status, body_msg
        )))
    }
}
