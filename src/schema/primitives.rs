//! Atomic constraint checks shared by the validator
//!
//! Pure functions over borrowed input; no allocation on the pass path,
//! no side effects.

use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

lazy_static! {
    /// Email pattern: local part, '@', domain containing at least one dot
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Checks for the canonical 36-character hyphenated identifier format.
///
/// Shorter, braced, and urn-prefixed renderings of the same token are
/// rejected; only the canonical form crosses the boundary.
pub fn is_identifier(value: &str) -> bool {
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}

/// Checks for a well-formed email address
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Checks for an ISO-8601 date-time (RFC 3339) or calendar date
pub fn is_datetime(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Coerces a raw value to an integer.
///
/// JSON integers pass through; strings are parsed. Floats, booleans and
/// everything else refuse coercion.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}
