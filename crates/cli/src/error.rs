//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map error variants from the client, config and orchestration layers
//!   to appropriate exit codes.
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use std::path::PathBuf;

use esper_client::ClientError;
use esper_config::ConfigError;

/// Structured exit codes for esper-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing or invalid tenants file.
    ConfigError = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Source tenant or source role not found.
    NotFound = 4,

    /// At least one target clone failed.
    CloneFailed = 5,

    /// No valid target tenants resolved.
    NoTargets = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Orchestration failures surfaced by the CLI itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Source tenant '{name}' not found in {path}. Available tenants: {}", .available.join(", "))]
    UnknownSourceTenant {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("Specify --targets or --all-targets")]
    MissingTargetSelection,

    #[error("No valid target tenants to clone to")]
    NoValidTargets,

    #[error("{failed} of {total} target(s) failed")]
    CloneFailed { failed: usize, total: usize },
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::UnknownSourceTenant { .. } => ExitCode::NotFound,
            CliError::MissingTargetSelection | CliError::NoValidTargets => ExitCode::NoTargets,
            CliError::CloneFailed { .. } => ExitCode::CloneFailed,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::RoleNotFound { .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            err if err.is_connection_error() => ExitCode::ConnectionError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is found in
    /// the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigError.as_i32(), 2);
        assert_eq!(ExitCode::NoTargets.as_i32(), 6);
    }

    #[test]
    fn test_role_not_found_maps_to_not_found() {
        let err = ClientError::RoleNotFound {
            name: "Field Tech".to_string(),
            available: vec![],
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_api_404_maps_to_not_found() {
        let err = ClientError::ApiError {
            status: 404,
            url: "https://acme-api.esper.cloud/api".to_string(),
            message: "missing".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_other_api_errors_are_general() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://acme-api.esper.cloud/api".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_cli_error_mapping() {
        let err = CliError::CloneFailed { failed: 1, total: 2 };
        assert_eq!(ExitCode::from(&err), ExitCode::CloneFailed);

        let err = CliError::NoValidTargets;
        assert_eq!(ExitCode::from(&err), ExitCode::NoTargets);

        let err = CliError::UnknownSourceTenant {
            name: "acme".to_string(),
            path: PathBuf::from("tenants.json"),
            available: vec!["other".to_string()],
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_exit_code_ext_walks_anyhow_chain() {
        let err = anyhow::Error::new(CliError::CloneFailed { failed: 1, total: 3 })
            .context("run failed");
        assert_eq!(err.exit_code(), ExitCode::CloneFailed);

        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
