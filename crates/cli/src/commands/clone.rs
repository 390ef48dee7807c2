//! Clone command: the orchestration loop.
//!
//! Responsibilities:
//! - Fetch the role definition from the source tenant
//! - Resolve the target set (explicit list or all other tenants)
//! - Drive the reconciler across targets sequentially
//! - Aggregate and report per-target results
//!
//! Invariants:
//! - The fetched definition is passed read-only to every target.
//! - One failed target never stops the remaining targets; the run exits
//!   non-zero if any target failed.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use esper_client::{CloneOutcome, EsperClient, RoleCloner, RoleDefinition};
use esper_config::{TenantConfig, Tenants};

use crate::error::CliError;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    tenants: &Tenants,
    config_path: &Path,
    source: &str,
    role: &str,
    explicit_targets: &[String],
    all_targets: bool,
    dry_run: bool,
    timeout: Duration,
) -> Result<()> {
    let source_cfg = super::resolve_source(tenants, source, config_path)?;
    let source_client = EsperClient::for_tenant(source_cfg, timeout)?;

    info!(role, source, "fetching role definition");
    let definition = source_client.fetch_role_definition(role).await?;
    let targets = resolve_targets(tenants, source, explicit_targets, all_targets)?;

    if dry_run {
        println!("DRY RUN - no changes will be made");
    }
    println!();
    println!("  Role:    {}", definition.name);
    println!("  Scopes:  {} permission(s)", definition.scopes.len());
    println!("  Source:  {}", source);
    println!(
        "  Targets: {}",
        targets
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    let cloner = RoleCloner::new(dry_run);
    let mut results: Vec<(String, bool)> = Vec::new();

    for (name, tenant) in &targets {
        let success = clone_one(&cloner, name, tenant, &definition, timeout).await;
        results.push((name.clone(), success));
    }

    let succeeded = results.iter().filter(|(_, ok)| *ok).count();
    let failed = results.len() - succeeded;

    println!();
    for (name, success) in &results {
        let marker = if *success { "ok" } else { "FAILED" };
        println!("  [{}] {}", marker, name);
    }
    println!(
        "\n  {} succeeded, {} failed out of {} target(s)",
        succeeded,
        failed,
        results.len()
    );

    if failed > 0 {
        return Err(CliError::CloneFailed {
            failed,
            total: results.len(),
        }
        .into());
    }
    Ok(())
}

/// Clone onto one target, reporting the outcome. Failures are confined to
/// this target.
async fn clone_one(
    cloner: &RoleCloner,
    name: &str,
    tenant: &TenantConfig,
    definition: &RoleDefinition,
    timeout: Duration,
) -> bool {
    println!("Cloning '{}' -> {}", definition.name, name);

    let client = match EsperClient::for_tenant(tenant, timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("  failed: {}", e);
            return false;
        }
    };

    match cloner.clone_to_tenant(&client, definition).await {
        Ok(outcome) => {
            println!("  {}", describe(&outcome));
            true
        }
        Err(e) => {
            eprintln!("  failed: {}", e);
            false
        }
    }
}

fn describe(outcome: &CloneOutcome) -> String {
    match outcome {
        CloneOutcome::Updated { role_id } => {
            format!("updated scopes on existing role (ID: {})", role_id)
        }
        CloneOutcome::Created { role_id } => {
            format!("created role (ID: {}) and applied scopes", role_id)
        }
        CloneOutcome::WouldUpdate => "would update scopes on existing role".to_string(),
        CloneOutcome::WouldCreate => "would create role and apply scopes".to_string(),
    }
}

/// Resolve the target set. Unknown names and the source itself are dropped
/// with a warning; an empty result is an error.
fn resolve_targets<'a>(
    tenants: &'a Tenants,
    source: &str,
    explicit: &[String],
    all_targets: bool,
) -> Result<Vec<(String, &'a TenantConfig)>, CliError> {
    let targets: Vec<(String, &TenantConfig)> = if all_targets {
        tenants
            .iter()
            .filter(|(name, _)| *name != source)
            .map(|(name, tenant)| (name.to_string(), tenant))
            .collect()
    } else if !explicit.is_empty() {
        let mut out: Vec<(String, &TenantConfig)> = Vec::new();
        for raw in explicit {
            let name = raw.trim();
            if name.is_empty() || out.iter().any(|(seen, _)| seen == name) {
                continue;
            }
            if name == source {
                warn!(tenant = name, "skipping source tenant as a target");
                continue;
            }
            match tenants.get(name) {
                Some(tenant) => out.push((name.to_string(), tenant)),
                None => warn!(tenant = name, "target tenant not found in config, skipping"),
            }
        }
        out
    } else {
        return Err(CliError::MissingTargetSelection);
    };

    if targets.is_empty() {
        return Err(CliError::NoValidTargets);
    }
    Ok(targets)
}
