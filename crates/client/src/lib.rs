//! Esper AuthZ v2 REST API client.
//!
//! This crate provides a tenant-scoped client for the Esper roles API and
//! the reconciliation logic for cloning a custom role definition from one
//! tenant onto others.

pub mod client;
pub mod cloner;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod normalize;
mod serde_helpers;

pub use client::EsperClient;
pub use client::builder::EsperClientBuilder;
pub use cloner::{CloneError, CloneOutcome, RoleCloner};
pub use error::{ClientError, Result};
pub use models::{Role, RoleDefinition, ScopeId, scope_names};
