//! Common test utilities for integration tests.
//!
//! Invariants:
//! - Test clients zero the pacing delay so tests never sleep between
//!   calls.

use std::time::Duration;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use esper_client::EsperClient;
use secrecy::SecretString;

/// Build an [`EsperClient`] pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> EsperClient {
    EsperClient::builder()
        .base_url(base_url.to_string())
        .api_key(SecretString::new("test-key".to_string().into()))
        .timeout(Duration::from_secs(5))
        .pace(Duration::ZERO)
        .build()
        .unwrap()
}
