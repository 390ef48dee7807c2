//! Tenants file loading.
//!
//! Responsibilities:
//! - Load and validate the tenants JSON file.
//! - Gate `.env` loading behind `DOTENV_DISABLED` so tests stay hermetic.
//!
//! Does NOT handle:
//! - Building API clients from tenant entries (see `esper-client`).
//!
//! Invariants:
//! - A missing file or an empty tenant map is fatal; errors carry the path.
//! - Missing per-tenant fields surface as parse errors with the file path.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Tenants;

/// Errors that can occur while loading the tenants file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Tenants file not found: {path}. Run `esper-cli sample-config` to generate a starting point."
    )]
    FileNotFound { path: PathBuf },

    #[error("Failed to read tenants file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tenants file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No tenants found in {path}")]
    NoTenants { path: PathBuf },
}

/// Load the tenants file from `path`.
pub fn load_tenants(path: &Path) -> Result<Tenants, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tenants: Tenants = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if tenants.is_empty() {
        return Err(ConfigError::NoTenants {
            path: path.to_path_buf(),
        });
    }

    Ok(tenants)
}

/// Load `.env` into the process environment unless `DOTENV_DISABLED` is set.
///
/// Must be called before clap parsing so env-backed arguments can read
/// `.env` values. A missing `.env` file is not an error.
pub fn load_dotenv() {
    if std::env::var_os("DOTENV_DISABLED").is_some() {
        tracing::debug!(".env loading disabled via DOTENV_DISABLED");
        return;
    }
    let _ = dotenvy::dotenv();
}
