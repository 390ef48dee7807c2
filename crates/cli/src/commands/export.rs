//! Export command implementation.
//!
//! Writes a fetched role definition to a JSON file for sharing and
//! auditing. Export is a terminal action; no cloning happens.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use esper_client::EsperClient;
use esper_config::Tenants;

pub async fn run(
    tenants: &Tenants,
    config_path: &Path,
    source: &str,
    role: &str,
    output: &Path,
    timeout: Duration,
) -> Result<()> {
    let tenant = super::resolve_source(tenants, source, config_path)?;
    let client = EsperClient::for_tenant(tenant, timeout)?;

    info!(role, source, "fetching role definition for export");
    let definition = client.fetch_role_definition(role).await?;

    let json = serde_json::to_string_pretty(&definition)
        .context("failed to serialize role definition")?;
    std::fs::write(output, json + "\n")
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Exported role '{}' ({} scopes) to {}",
        definition.name,
        definition.scopes.len(),
        output.display()
    );

    Ok(())
}
