//! Tenant configuration for the Esper role cloning tools.
//!
//! This crate provides the types and loader for the tenants file: a JSON
//! document mapping friendly tenant names to Esper API credentials.

pub mod constants;
mod loader;
mod sample;
mod types;

pub use loader::{ConfigError, load_dotenv, load_tenants};
pub use sample::sample_config;
pub use types::{TenantConfig, Tenants};
