//! Sample tenants file, printed by `esper-cli sample-config` and referenced
//! by the missing-file diagnostic.

/// A starting-point tenants file with placeholder credentials.
pub fn sample_config() -> &'static str {
    r#"{
  "tenants": {
    "acme-master": {
      "tenant_name": "acme-master",
      "enterprise_id": "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx",
      "api_key": "your-api-key-for-this-tenant"
    },
    "acme-region-east": {
      "tenant_name": "acme-east",
      "enterprise_id": "yyyyyyyy-yyyy-yyyy-yyyy-yyyyyyyyyyyy",
      "api_key": "your-api-key-for-this-tenant"
    },
    "acme-region-west": {
      "tenant_name": "acme-west",
      "enterprise_id": "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz",
      "api_key": "your-api-key-for-this-tenant"
    }
  }
}"#
}
