//! CLI command implementations.

pub mod clone;
pub mod export;
pub mod list_roles;
pub mod sample_config;

use std::path::Path;

use esper_config::{TenantConfig, Tenants};

use crate::error::CliError;

/// Resolve the source tenant by friendly name, listing the configured
/// names on a miss.
pub fn resolve_source<'a>(
    tenants: &'a Tenants,
    name: &str,
    config_path: &Path,
) -> Result<&'a TenantConfig, CliError> {
    tenants.get(name).ok_or_else(|| CliError::UnknownSourceTenant {
        name: name.to_string(),
        path: config_path.to_path_buf(),
        available: tenants.names().map(str::to_owned).collect(),
    })
}
