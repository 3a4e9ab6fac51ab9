//! Translation provider client

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::RelayConfig;
use crate::core::errors::{RelayError, Result};
use crate::core::models::Direction;

/// Client for the external translation provider, bound to one language pair
///
/// One handle per direction is built at startup and reused for every request,
/// so the underlying connection pool is shared across the process lifetime.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    config: Arc<RelayConfig>,
    direction: Direction,
}

impl Translator {
    /// Create a new translator for one direction
    pub fn new(config: Arc<RelayConfig>, direction: Direction) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config,
            direction,
        })
    }

    /// Direction this translator is bound to
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Translate a single text
    ///
    /// Empty input is a trivial translation of itself and never reaches the
    /// provider. No retries: the first failure surfaces to the caller.
    pub async fn translate(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.direction.source_lang()),
                ("tl", self.direction.target_lang()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| RelayError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RelayError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| RelayError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        let translation = parse_payload(&json)?;

        debug!(
            "Provider returned {} chars for {} input",
            translation.len(),
            self.direction
        );

        Ok(translation)
    }
}

/// Extract the translated text from the provider's nested-array payload
///
/// The endpoint answers with nested arrays: the first element holds one
/// `[translated, original, ...]` entry per sentence.
fn parse_payload(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| RelayError::InvalidResponseError {
            message: "No translation in response".to_string(),
        })?;

    let mut translation = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|p| p.as_str()) {
            translation.push_str(part);
        }
    }

    if translation.is_empty() {
        return Err(RelayError::InvalidResponseError {
            message: "Empty translation in response".to_string(),
        });
    }

    Ok(translation)
}
