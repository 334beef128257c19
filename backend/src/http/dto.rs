//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::algorithms::ClassificationResult;

/// Query parameters for `GET /api/classify-number`.
///
/// Built from the raw key/value pairs so that missing or repeated keys reach
/// the handler and get the same error body as any other bad input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyQuery {
    /// Every `number` value in the order given
    pub number: Vec<String>,
}

impl ClassifyQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            number: pairs
                .into_iter()
                .filter(|(key, _)| key == "number")
                .map(|(_, value)| value)
                .collect(),
        }
    }

    /// The single `number` value. On failure returns the text to echo back:
    /// empty when absent, the values joined with `,` when repeated.
    pub fn single_number(&self) -> Result<&str, String> {
        match self.number.as_slice() {
            [raw] => Ok(raw.as_str()),
            [] => Err(String::new()),
            many => Err(many.join(",")),
        }
    }
}

/// Classification of one number merged with its fun fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberReport {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub digit_sum: u64,
    /// `"armstrong"` when applicable, followed by exactly one of `"even"` / `"odd"`
    pub properties: Vec<String>,
    pub fun_fact: String,
}

impl NumberReport {
    pub fn new(number: i64, classification: &ClassificationResult, fun_fact: String) -> Self {
        let mut properties = Vec::with_capacity(2);
        if classification.armstrong {
            properties.push("armstrong".to_string());
        }
        properties.push(classification.parity.as_str().to_string());

        Self {
            number,
            is_prime: classification.prime,
            is_perfect: classification.perfect,
            digit_sum: classification.digit_sum,
            properties,
            fun_fact,
        }
    }
}

/// Body returned with 400 when the number cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidNumberResponse {
    /// The rejected input, verbatim
    pub number: String,
    pub error: bool,
}

/// Response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub email: String,
    /// Current UTC time, `YYYY-MM-DDTHH:MM:SSZ`
    pub current_datetime: String,
    pub github_url: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
}
