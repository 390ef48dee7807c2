//! Paced request sending.
//!
//! Every successful call is followed by a fixed delay: a self-imposed
//! client-side rate limit, not a reaction to server feedback. There is no
//! retry and no backoff anywhere; failures are returned immediately.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Send a request, map non-2xx to [`ClientError::ApiError`], then pause
/// for `pace` before handing the response back.
pub async fn send_paced(
    builder: RequestBuilder,
    pace: Duration,
    method: &str,
    endpoint: &str,
) -> Result<Response> {
    debug!(%method, %endpoint, "API call");

    let response = builder.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::ApiError {
            status,
            url,
            message,
        });
    }

    if !pace.is_zero() {
        tokio::time::sleep(pace).await;
    }

    Ok(response)
}
