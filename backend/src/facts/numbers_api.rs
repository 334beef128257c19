//! Client for the public Numbers API (<http://numbersapi.com>).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::error::{FactError, FactResult};
use super::lookup::FactLookup;
use crate::config::FactsSettings;

/// Body returned by `GET /{number}/math?json`.
#[derive(Debug, Deserialize)]
struct NumbersApiFact {
    text: String,
}

/// Fetches math facts over HTTP. One request per lookup, no retries.
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApiClient {
    /// Build a client with the configured base URL and request timeout.
    pub fn new(settings: &FactsSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}/math?json", self.base_url, number)
    }
}

#[async_trait]
impl FactLookup for NumbersApiClient {
    async fn lookup_fact(&self, number: i64) -> FactResult<String> {
        let url = self.fact_url(number);
        debug!(%url, "Requesting fun fact");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(number, error = %e, "Numbers API request failed");
            FactError::unavailable(number, format!("request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(number, %status, "Numbers API returned an error status");
            return Err(FactError::unavailable(
                number,
                format!("unexpected status {}", status),
            ));
        }

        let body: NumbersApiFact = response.json().await.map_err(|e| {
            warn!(number, error = %e, "Numbers API returned an unreadable body");
            FactError::unavailable(number, format!("invalid response body: {}", e))
        })?;

        let text = body.text.trim();
        if text.is_empty() {
            return Err(FactError::unavailable(number, "empty fact text"));
        }
        Ok(text.to_string())
    }
}
