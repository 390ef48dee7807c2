//! Role endpoints for the Esper AuthZ v2 API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::endpoints::send_paced;
use crate::error::{ClientError, Result};
use crate::models::Role;
use crate::normalize;

const ROLES_PATH: &str = "authz2/v1/roles/";

fn bearer(api_key: &str) -> String {
    format!("Bearer {}", api_key)
}

fn role_scopes_url(base_url: &str, role_id: &str) -> Result<Url> {
    Url::parse(&format!("{}/authz2/v1/roles/{}/scopes", base_url, role_id))
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid role scopes URL: {}", e)))
}

/// List the tenant's roles. Unrecognized response shapes decode to an
/// empty list rather than an error.
pub async fn list_roles(
    client: &Client,
    base_url: &str,
    api_key: &str,
    pace: Duration,
) -> Result<Vec<Role>> {
    let url = format!("{}/{}", base_url, ROLES_PATH);

    let builder = client.get(&url).header("Authorization", bearer(api_key));
    let response = send_paced(builder, pace, "GET", ROLES_PATH).await?;

    let body: Value = response.json().await?;
    Ok(normalize::roles_from_response(body))
}

/// Fetch the raw scope payload for a role. Callers normalize the shape.
pub async fn get_role_scopes(
    client: &Client,
    base_url: &str,
    api_key: &str,
    pace: Duration,
    role_id: &str,
) -> Result<Value> {
    let url = role_scopes_url(base_url, role_id)?;
    let endpoint = format!("authz2/v1/roles/{}/scopes", role_id);

    let builder = client.get(url).header("Authorization", bearer(api_key));
    let response = send_paced(builder, pace, "GET", &endpoint).await?;

    Ok(response.json().await?)
}

/// Create a role with a name and description only; scopes are applied
/// separately.
pub async fn create_role(
    client: &Client,
    base_url: &str,
    api_key: &str,
    pace: Duration,
    name: &str,
    description: &str,
) -> Result<Role> {
    let url = format!("{}/{}", base_url, ROLES_PATH);
    let payload = serde_json::json!({ "name": name, "description": description });

    let builder = client
        .post(&url)
        .header("Authorization", bearer(api_key))
        .json(&payload);
    let response = send_paced(builder, pace, "POST", ROLES_PATH).await?;

    let body: Value = response.json().await?;
    let role: Role = serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse created role: {}", e)))?;

    if role.identifier().is_none() {
        return Err(ClientError::InvalidResponse(
            "Missing id in create role response".to_string(),
        ));
    }

    Ok(role)
}

/// Replace the full scope set on a role with `scope_names`.
pub async fn update_role_scopes(
    client: &Client,
    base_url: &str,
    api_key: &str,
    pace: Duration,
    role_id: &str,
    scope_names: &[String],
) -> Result<()> {
    let url = role_scopes_url(base_url, role_id)?;
    let endpoint = format!("authz2/v1/roles/{}/scopes", role_id);
    let payload = serde_json::json!({ "scope_names": scope_names });

    let builder = client
        .put(url)
        .header("Authorization", bearer(api_key))
        .json(&payload);
    send_paced(builder, pace, "PUT", &endpoint).await?;

    Ok(())
}
