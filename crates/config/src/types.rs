//! Tenant configuration types.
//!
//! Responsibilities:
//! - Define `TenantConfig`, the credentials and address for one tenant.
//! - Define `Tenants`, the friendly-name to tenant map loaded from disk.
//!
//! Does NOT handle:
//! - File loading or validation (see `loader`).
//!
//! Invariants:
//! - `api_key` is a `SecretString`; Debug output never exposes it.
//! - Tenants iterate in sorted friendly-name order, so `--all-targets`
//!   runs are deterministic.

use std::collections::BTreeMap;

use secrecy::SecretString;
use serde::Deserialize;

/// Credentials and address for a single Esper tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantConfig {
    /// The Esper subdomain, e.g. `acme-east` in `acme-east-api.esper.cloud`.
    #[serde(rename = "tenant_name")]
    pub subdomain: String,
    /// Enterprise UUID for this tenant.
    pub enterprise_id: String,
    /// API key used as the bearer credential for every call.
    pub api_key: SecretString,
    /// Full API base URL override. When unset the address is derived from
    /// the subdomain.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// The tenants file: friendly name to tenant configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tenants {
    #[serde(default)]
    tenants: BTreeMap<String, TenantConfig>,
}

impl Tenants {
    /// Look up a tenant by its friendly name.
    pub fn get(&self, name: &str) -> Option<&TenantConfig> {
        self.tenants.get(name)
    }

    /// Whether the map holds any tenants at all.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Friendly names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tenants.keys().map(String::as_str)
    }

    /// All `(name, tenant)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TenantConfig)> {
        self.tenants.iter().map(|(name, cfg)| (name.as_str(), cfg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tenants() -> Tenants {
        serde_json::from_str(
            r#"{
                "tenants": {
                    "acme-west": {
                        "tenant_name": "acme-west",
                        "enterprise_id": "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz",
                        "api_key": "west-key"
                    },
                    "acme-east": {
                        "tenant_name": "acme-east",
                        "enterprise_id": "yyyyyyyy-yyyy-yyyy-yyyy-yyyyyyyyyyyy",
                        "api_key": "east-key"
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_tenants_iterate_in_sorted_order() {
        let tenants = sample_tenants();
        let names: Vec<&str> = tenants.names().collect();
        assert_eq!(names, vec!["acme-east", "acme-west"]);
    }

    #[test]
    fn test_tenant_lookup_by_friendly_name() {
        let tenants = sample_tenants();
        let east = tenants.get("acme-east").unwrap();
        assert_eq!(east.subdomain, "acme-east");
        assert_eq!(east.base_url, None);
        assert!(tenants.get("acme-north").is_none());
    }

    /// Debug output must never contain the API key.
    #[test]
    fn test_tenant_debug_does_not_expose_api_key() {
        let tenants = sample_tenants();
        let debug_output = format!("{:?}", tenants.get("acme-east").unwrap());
        assert!(
            !debug_output.contains("east-key"),
            "Debug output should not contain the API key"
        );
        assert!(debug_output.contains("acme-east"));
    }

    #[test]
    fn test_base_url_override_is_optional() {
        let tenant: TenantConfig = serde_json::from_str(
            r#"{
                "tenant_name": "acme-lab",
                "enterprise_id": "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa",
                "api_key": "lab-key",
                "base_url": "http://127.0.0.1:9999/api"
            }"#,
        )
        .unwrap();
        assert_eq!(tenant.base_url.as_deref(), Some("http://127.0.0.1:9999/api"));
    }

    #[test]
    fn test_missing_required_field_is_a_parse_error() {
        let result: Result<TenantConfig, _> = serde_json::from_str(
            r#"{ "tenant_name": "acme-east", "api_key": "east-key" }"#,
        );
        assert!(result.is_err());
    }
}
