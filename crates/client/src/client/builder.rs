//! Client construction and configuration.
//!
//! Invariants:
//! - The base URL is required and stored without a trailing slash.
//! - The pacing delay defaults to the workspace rate-limit constant; tests
//!   zero it so they do not sleep between calls.

use std::time::Duration;

use secrecy::SecretString;

use crate::client::EsperClient;
use crate::error::{ClientError, Result};
use esper_config::constants::{DEFAULT_TIMEOUT_SECS, RATE_LIMIT_DELAY_MS};

/// Builder for [`EsperClient`].
#[derive(Debug, Default)]
pub struct EsperClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    timeout: Option<Duration>,
    pace: Option<Duration>,
}

impl EsperClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://acme-api.esper.cloud/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the bearer API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the fixed delay inserted after every successful call.
    pub fn pace(mut self, pace: Duration) -> Self {
        self.pace = Some(pace);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<EsperClient> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base URL is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let api_key = self.api_key.ok_or(ClientError::MissingApiKey)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(EsperClient {
            http,
            base_url,
            api_key,
            pace: self
                .pace
                .unwrap_or(Duration::from_millis(RATE_LIMIT_DELAY_MS)),
        })
    }
}
