//! Role API methods for [`EsperClient`].
//!
//! # What this module handles:
//! - Listing roles and looking them up by display name
//! - Fetching scope payloads
//! - Creating roles and replacing their scope sets
//! - Composing a portable [`RoleDefinition`] from a source tenant
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])
//! - Create-vs-update decisions (in [`crate::cloner`])

use serde_json::Value;
use tracing::debug;

use crate::client::EsperClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Role, RoleDefinition};
use crate::normalize;

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl EsperClient {
    /// List the tenant's roles.
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        endpoints::list_roles(&self.http, &self.base_url, self.bearer(), self.pace).await
    }

    /// Find a role by display name.
    ///
    /// Matching is case-insensitive and whitespace-trimmed; the first
    /// match wins. A missing role is a normal outcome, not an error.
    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let wanted = name_key(name);
        let roles = self.list_roles().await?;
        Ok(roles
            .into_iter()
            .find(|role| name_key(&role.name) == wanted))
    }

    /// Fetch the raw scope payload for a role.
    pub async fn get_role_scopes(&self, role_id: &str) -> Result<Value> {
        endpoints::get_role_scopes(&self.http, &self.base_url, self.bearer(), self.pace, role_id)
            .await
    }

    /// Create a role with no scopes.
    pub async fn create_role(&self, name: &str, description: &str) -> Result<Role> {
        endpoints::create_role(
            &self.http,
            &self.base_url,
            self.bearer(),
            self.pace,
            name,
            description,
        )
        .await
    }

    /// Replace the full scope set on a role.
    pub async fn update_role_scopes(&self, role_id: &str, scope_names: &[String]) -> Result<()> {
        endpoints::update_role_scopes(
            &self.http,
            &self.base_url,
            self.bearer(),
            self.pace,
            role_id,
            scope_names,
        )
        .await
    }

    /// Fetch a complete, portable role definition from this tenant.
    ///
    /// Fails with [`ClientError::RoleNotFound`], listing the tenant's role
    /// names, when no role matches.
    pub async fn fetch_role_definition(&self, role_name: &str) -> Result<RoleDefinition> {
        let roles = self.list_roles().await?;
        let wanted = name_key(role_name);

        let role = roles
            .iter()
            .find(|role| name_key(&role.name) == wanted)
            .ok_or_else(|| ClientError::RoleNotFound {
                name: role_name.to_string(),
                available: roles.iter().map(|role| role.name.clone()).collect(),
            })?;

        let role_id = role.identifier().ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "Role '{}' has no usable identifier",
                role.name
            ))
        })?;

        let raw_scopes = self.get_role_scopes(role_id).await?;
        let scopes = normalize::scope_identifiers(&raw_scopes);
        debug!(role = %role.name, scope_count = scopes.len(), "captured role definition");

        Ok(RoleDefinition {
            name: role.name.clone(),
            description: role.description.clone(),
            scopes,
            raw_scopes,
        })
    }
}
