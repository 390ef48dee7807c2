//! Shared test utilities for esper-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Build temporary tenants files pointed at mock servers.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use std::io::Write as _;

use assert_cmd::Command;

/// Returns a hermetic `esper-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Host env vars that would leak configuration are cleared.
pub fn esper_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("esper-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("ESPER_CONFIG_PATH")
        .env_remove("ESPER_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Write a tenants file whose entries point at the given base URLs
/// (usually wiremock servers).
#[allow(dead_code)]
pub fn tenants_file(entries: &[(&str, &str)]) -> tempfile::NamedTempFile {
    let mut tenants = serde_json::Map::new();
    for (name, base_url) in entries {
        tenants.insert(
            name.to_string(),
            serde_json::json!({
                "tenant_name": name,
                "enterprise_id": "00000000-0000-0000-0000-000000000000",
                "api_key": format!("{name}-key"),
                "base_url": base_url,
            }),
        );
    }
    let doc = serde_json::json!({ "tenants": tenants });

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&doc).unwrap().as_bytes())
        .unwrap();
    file.flush().unwrap();
    file
}
