//! Serde helpers for the API's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for identifier fields.
//!
//! Invariants / assumptions:
//! - Some Esper environments return role identifiers as numbers, others as
//!   strings; both must decode to the same model field.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(StringOrNumber::String(s)) => Some(s),
        Some(StringOrNumber::U64(v)) => Some(v.to_string()),
        Some(StringOrNumber::I64(v)) => Some(v.to_string()),
        Some(StringOrNumber::F64(v)) => Some(v.to_string()),
    })
}
