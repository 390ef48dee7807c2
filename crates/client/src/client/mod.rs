//! Main Esper REST API client.
//!
//! One [`EsperClient`] per tenant: the bearer credential, base address,
//! timeout and pacing delay are fixed at construction.
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - `roles`: role API methods

pub mod builder;
mod roles;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;
use esper_config::TenantConfig;

/// Tenant-scoped Esper REST API client.
#[derive(Debug)]
pub struct EsperClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) pace: Duration,
}

impl EsperClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EsperClientBuilder {
        builder::EsperClientBuilder::new()
    }

    /// Build a client for a configured tenant, deriving the API address
    /// from the subdomain unless the config overrides it.
    pub fn for_tenant(tenant: &TenantConfig, timeout: Duration) -> Result<Self> {
        let base_url = tenant
            .base_url
            .clone()
            .unwrap_or_else(|| derive_base_url(&tenant.subdomain));

        Self::builder()
            .base_url(base_url)
            .api_key(tenant.api_key.clone())
            .timeout(timeout)
            .build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn bearer(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// The API address Esper serves a tenant's subdomain on.
pub fn derive_base_url(subdomain: &str) -> String {
    format!("https://{}-api.esper.cloud/api", subdomain)
}
