//! Decoder implementations

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Flexible integer
// ============================================================================

/// Decode a JSON value that may be a number or a numeric string into an i64.
///
/// Accepted shapes:
/// - a JSON number (fractional parts are truncated toward zero)
/// - a JSON string holding a base-10 integer literal
///
/// Any other shape fails with a decode error naming the offending value.
pub fn parse_flexible_int(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                // u64 beyond i64 range
                Err(Error::decode(format!("integer out of range: {n}")))
            }
        }
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|_| Error::decode(format!("expected integer, got string {s:?}"))),
        other => Err(Error::decode(format!(
            "expected integer or integer string, got {other}"
        ))),
    }
}

/// Serde adapter for [`parse_flexible_int`].
pub fn flex_int<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_flexible_int(&value).map_err(serde::de::Error::custom)
}

/// Serde adapter for optional flexible integers.
///
/// Absent and null both decode to `None`; everything else follows
/// [`parse_flexible_int`].
pub fn flex_int_opt<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        other => parse_flexible_int(&other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Serde adapter for an optional RFC 3339 timestamp.
///
/// Absent and null decode to `None`. A present but unparseable string is an
/// error: silently coercing a bad timestamp would corrupt the export. The
/// source offset is preserved, no timezone conversion happens here.
pub fn rfc3339_opt<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {s:?}: {e}"))),
    }
}
