//! List-roles command implementation.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use esper_client::EsperClient;
use esper_config::Tenants;

pub async fn run(
    tenants: &Tenants,
    config_path: &Path,
    source: &str,
    timeout: Duration,
) -> Result<()> {
    let tenant = super::resolve_source(tenants, source, config_path)?;
    let client = EsperClient::for_tenant(tenant, timeout)?;

    info!(source, "listing roles");
    let roles = client.list_roles().await?;

    println!("Roles in tenant: {}", source);
    for role in &roles {
        println!("  {} (ID: {})", role.name, role.identifier().unwrap_or("N/A"));
        if !role.description.is_empty() {
            println!("    {}", role.description);
        }
    }
    println!("\n  Total: {} role(s)", roles.len());

    Ok(())
}
