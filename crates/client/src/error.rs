//! Error types for the Esper client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Esper client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx API response. A hard failure for that call; nothing is
    /// retried.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from the API.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API key missing at client construction.
    #[error("API key is required")]
    MissingApiKey,

    /// The requested role does not exist on the tenant.
    #[error("Role '{name}' not found. Available roles: {}", .available.join(", "))]
    RoleNotFound {
        name: String,
        available: Vec<String>,
    },
}

impl ClientError {
    /// Check if this error stems from failing to reach the server at all.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}
