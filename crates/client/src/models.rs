//! Data models for the Esper roles API.

pub mod roles;

pub use roles::{Role, RoleDefinition, ScopeId, scope_names};
