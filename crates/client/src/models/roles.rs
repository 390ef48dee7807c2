//! Role and scope models for the Esper AuthZ v2 roles API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A role as returned by the roles endpoints.
///
/// Every field is defaulted: the list endpoint varies across environments
/// and sparse records must not fail the whole response.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Role {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Role identifier; some environments return it as a number.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub id: Option<String>,
    /// Identifier field used by older environments.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub role_id: Option<String>,
}

impl Role {
    /// The usable identifier: `id`, falling back to `role_id`.
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().or(self.role_id.as_deref())
    }
}

/// A single permission scope identifier.
///
/// Identifiers are strings in the common case; non-string identifier
/// values and unrecognized scope objects are preserved as-is so the
/// export file loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeId {
    Name(String),
    Raw(Value),
}

impl ScopeId {
    /// The string this scope contributes to the `scope_names` wire payload.
    ///
    /// Strings pass through; raw objects contribute their `name` or
    /// `scope` field; anything else stays off the wire.
    pub fn wire_name(&self) -> Option<&str> {
        match self {
            ScopeId::Name(name) => Some(name),
            ScopeId::Raw(Value::Object(obj)) => obj
                .get("name")
                .and_then(Value::as_str)
                .or_else(|| obj.get("scope").and_then(Value::as_str)),
            ScopeId::Raw(_) => None,
        }
    }
}

/// Collect the wire payload names for a scope list, preserving order.
pub fn scope_names(scopes: &[ScopeId]) -> Vec<String> {
    scopes
        .iter()
        .filter_map(|scope| scope.wire_name().map(str::to_owned))
        .collect()
}

/// A portable role definition fetched from a source tenant.
///
/// Constructed once, then applied read-only to every target. Also the
/// `export` file format: `{name, description, scopes, raw_scopes}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scopes: Vec<ScopeId>,
    /// The source tenant's original scope payload, kept for auditing.
    #[serde(default)]
    pub raw_scopes: Value,
}
