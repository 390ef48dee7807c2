//! Shape-tolerant decoding of roles-API payloads.
//!
//! Responsibilities:
//! - Extract role lists and scope lists from the response shapes seen
//!   across Esper environments.
//! - Extract portable scope identifiers from heterogeneous scope items.
//!
//! Does NOT handle:
//! - HTTP status handling (see `endpoints::request`).
//!
//! Invariants:
//! - Unrecognized shapes degrade to empty lists; nothing here errors. The
//!   caller still reports a sensible count either way.
//! - Scope order is preserved from the source payload.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Role, ScopeId};

/// Role list shapes: `{"roles": [...]}`, `{"results": [...]}`, or a bare
/// list. Wrapping objects may carry extra fields such as `count`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleListShape {
    Wrapped { roles: Vec<Role> },
    Paged { results: Vec<Role> },
    Bare(Vec<Role>),
}

/// Decode a role list from a raw response body.
pub fn roles_from_response(value: Value) -> Vec<Role> {
    match serde_json::from_value(value) {
        Ok(RoleListShape::Wrapped { roles }) => roles,
        Ok(RoleListShape::Paged { results }) => results,
        Ok(RoleListShape::Bare(roles)) => roles,
        Err(_) => Vec::new(),
    }
}

/// Scope list shapes: a bare list, `{"scopes": [...]}`, or
/// `{"results": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeListShape {
    Bare(Vec<Value>),
    Wrapped { scopes: Vec<Value> },
    Paged { results: Vec<Value> },
}

/// Keys tried, in order, when a scope item is an object.
const SCOPE_KEYS: [&str; 5] = ["scope", "name", "permission", "id", "slug"];

/// Decode a scope list and extract portable identifiers, preserving order.
pub fn scope_identifiers(value: &Value) -> Vec<ScopeId> {
    let items = match ScopeListShape::deserialize(value) {
        Ok(ScopeListShape::Bare(items))
        | Ok(ScopeListShape::Wrapped { scopes: items })
        | Ok(ScopeListShape::Paged { results: items }) => items,
        Err(_) => return Vec::new(),
    };

    items.iter().filter_map(extract_identifier).collect()
}

fn extract_identifier(item: &Value) -> Option<ScopeId> {
    match item {
        Value::String(name) => Some(ScopeId::Name(name.clone())),
        Value::Object(obj) => {
            for key in SCOPE_KEYS {
                if let Some(found) = obj.get(key) {
                    return Some(match found {
                        Value::String(name) => ScopeId::Name(name.clone()),
                        other => ScopeId::Raw(other.clone()),
                    });
                }
            }
            // No known key: keep the whole item.
            Some(ScopeId::Raw(item.clone()))
        }
        // Neither a string nor an object: nothing usable to carry.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roles_from_wrapped_response() {
        let roles = roles_from_response(json!({
            "count": 2,
            "roles": [{ "name": "Admin", "id": "1" }, { "name": "Viewer", "id": "2" }]
        }));
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].name, "Admin");
    }

    #[test]
    fn test_roles_from_results_response() {
        let roles = roles_from_response(json!({
            "results": [{ "name": "Admin", "id": "1" }]
        }));
        assert_eq!(roles.len(), 1);
    }

    #[test]
    fn test_roles_from_bare_list() {
        let roles = roles_from_response(json!([{ "name": "Admin", "id": 1 }]));
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].identifier(), Some("1"));
    }

    #[test]
    fn test_unrecognized_role_shapes_degrade_to_empty() {
        assert!(roles_from_response(json!({})).is_empty());
        assert!(roles_from_response(json!({ "roles": "not-a-list" })).is_empty());
        assert!(roles_from_response(json!("malformed")).is_empty());
        assert!(roles_from_response(json!(null)).is_empty());
    }

    #[test]
    fn test_scope_identifiers_from_bare_string_list() {
        let scopes = scope_identifiers(&json!(["devices.read", "devices.write"]));
        assert_eq!(
            scopes,
            vec![
                ScopeId::Name("devices.read".to_string()),
                ScopeId::Name("devices.write".to_string()),
            ]
        );
    }

    #[test]
    fn test_scope_identifiers_from_wrapped_shapes() {
        let wrapped = scope_identifiers(&json!({ "scopes": ["a"], "count": 1 }));
        assert_eq!(wrapped, vec![ScopeId::Name("a".to_string())]);

        let paged = scope_identifiers(&json!({ "results": ["b"] }));
        assert_eq!(paged, vec![ScopeId::Name("b".to_string())]);
    }

    #[test]
    fn test_scope_key_priority() {
        // Each known key is honored on its own.
        for key in ["scope", "name", "permission", "id", "slug"] {
            let scopes = scope_identifiers(&json!([{ (key): "x" }]));
            assert_eq!(scopes, vec![ScopeId::Name("x".to_string())], "key {key}");
        }

        // `scope` beats `name`, `name` beats `permission`.
        let scopes = scope_identifiers(&json!([
            { "scope": "first", "name": "second" },
            { "name": "second", "permission": "third" }
        ]));
        assert_eq!(
            scopes,
            vec![
                ScopeId::Name("first".to_string()),
                ScopeId::Name("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_scope_object_is_kept_whole() {
        let item = json!({ "group": "misc", "level": 3 });
        let scopes = scope_identifiers(&json!([item.clone()]));
        assert_eq!(scopes, vec![ScopeId::Raw(item)]);
    }

    #[test]
    fn test_non_string_identifier_value_is_kept_raw() {
        let scopes = scope_identifiers(&json!([{ "id": 42 }]));
        assert_eq!(scopes, vec![ScopeId::Raw(json!(42))]);
    }

    #[test]
    fn test_unusable_scope_items_are_skipped() {
        let scopes = scope_identifiers(&json!(["keep", 42, null, "also-keep"]));
        assert_eq!(
            scopes,
            vec![
                ScopeId::Name("keep".to_string()),
                ScopeId::Name("also-keep".to_string()),
            ]
        );
    }

    #[test]
    fn test_unrecognized_scope_shapes_degrade_to_empty() {
        assert!(scope_identifiers(&json!({})).is_empty());
        assert!(scope_identifiers(&json!("malformed")).is_empty());
        assert!(scope_identifiers(&json!(null)).is_empty());
    }
}
