//! Role reconciliation across tenants.
//!
//! Given a portable role definition and a target tenant, decide whether
//! the role must be created or updated, and apply it. Scope application
//! fully replaces the target's scope set; "clone" means the target ends
//! up mirroring the source.

use thiserror::Error;
use tracing::{debug, info};

use crate::client::EsperClient;
use crate::error::ClientError;
use crate::models::{RoleDefinition, scope_names};

/// What a clone did, or would have done in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    /// Scopes replaced on an existing role.
    Updated { role_id: String },
    /// Role created, then scopes applied to it.
    Created { role_id: String },
    /// Dry run: an existing role's scopes would have been replaced.
    WouldUpdate,
    /// Dry run: the role would have been created with the full scope set.
    WouldCreate,
}

/// Per-step clone failures.
///
/// The failed step is kept distinct so a half-created role (created, but
/// scopes not applied) is distinguishable from an update failure. Either
/// way the target is reported as a plain failure.
#[derive(Error, Debug)]
pub enum CloneError {
    #[error("failed to look up role on target: {0}")]
    Lookup(#[source] ClientError),

    #[error("failed to update scopes on existing role: {0}")]
    UpdateScopes(#[source] ClientError),

    #[error("failed to create role: {0}")]
    CreateRole(#[source] ClientError),

    /// The role was created but applying scopes failed. The empty role is
    /// left behind; no rollback is attempted.
    #[error("role created (id {role_id}) but applying scopes failed: {source}")]
    ApplyScopes {
        role_id: String,
        #[source]
        source: ClientError,
    },
}

/// Clones a role definition onto target tenants.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCloner {
    dry_run: bool,
}

impl RoleCloner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Whether mutating calls are suppressed.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Clone `definition` onto `target`.
    ///
    /// The lookup always runs, dry-run included: the create-vs-update
    /// decision needs the target's current state.
    pub async fn clone_to_tenant(
        &self,
        target: &EsperClient,
        definition: &RoleDefinition,
    ) -> Result<CloneOutcome, CloneError> {
        let existing = target
            .find_role_by_name(&definition.name)
            .await
            .map_err(CloneError::Lookup)?;

        let names = scope_names(&definition.scopes);

        if let Some(existing) = existing {
            let role_id = existing
                .identifier()
                .ok_or_else(|| {
                    CloneError::Lookup(ClientError::InvalidResponse(format!(
                        "Existing role '{}' has no usable identifier",
                        existing.name
                    )))
                })?
                .to_string();
            debug!(role = %definition.name, %role_id, "role exists on target, replacing scopes");

            if self.dry_run {
                info!(
                    role = %definition.name,
                    scope_count = names.len(),
                    "dry run: would update scopes on existing role"
                );
                return Ok(CloneOutcome::WouldUpdate);
            }

            target
                .update_role_scopes(&role_id, &names)
                .await
                .map_err(CloneError::UpdateScopes)?;
            return Ok(CloneOutcome::Updated { role_id });
        }

        if self.dry_run {
            info!(
                role = %definition.name,
                scope_count = names.len(),
                "dry run: would create role and apply scopes"
            );
            return Ok(CloneOutcome::WouldCreate);
        }

        let created = target
            .create_role(&definition.name, &definition.description)
            .await
            .map_err(CloneError::CreateRole)?;
        let role_id = created
            .identifier()
            .ok_or_else(|| {
                CloneError::CreateRole(ClientError::InvalidResponse(
                    "Missing id in create role response".to_string(),
                ))
            })?
            .to_string();

        target
            .update_role_scopes(&role_id, &names)
            .await
            .map_err(|source| CloneError::ApplyScopes {
                role_id: role_id.clone(),
                source,
            })?;

        Ok(CloneOutcome::Created { role_id })
    }
}
