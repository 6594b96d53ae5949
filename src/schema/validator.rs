//! Generic schema interpreter
//!
//! Validation semantics:
//! - Every declared field is checked; the pass never stops at the first
//!   failing field
//! - Violations are recorded in schema declaration order
//! - Absent defaulted fields are substituted and treated as valid
//! - Undeclared input fields are ignored and dropped from the output
//! - On success the returned value is normalized: coerced integers,
//!   substituted defaults, declared fields only
//!
//! Validation is deterministic and does not mutate its input.

use serde_json::{Map, Value};

use super::errors::{FieldViolation, ValidationError, ValidationResult};
use super::primitives::{coerce_integer, is_datetime, is_email, is_identifier};
use super::types::{Constraint, Schema, StringFormat};

/// Validates a raw value against a schema.
///
/// Returns the normalized value on success, or an aggregated failure
/// covering every violated constraint across every field.
pub fn validate(schema: &Schema, input: &Value) -> ValidationResult {
    let obj = match input.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::single("$root", "must be an object")),
    };

    let mut violations = Vec::new();
    let output = validate_object(schema, obj, "", &mut violations);

    if violations.is_empty() {
        Ok(Value::Object(output))
    } else {
        Err(ValidationError::new(violations))
    }
}

/// Validates an object against a schema's fields, collecting violations
/// and building the normalized output.
fn validate_object(
    schema: &Schema,
    obj: &Map<String, Value>,
    path_prefix: &str,
    violations: &mut Vec<FieldViolation>,
) -> Map<String, Value> {
    let mut output = Map::new();

    for (field_name, field_def) in schema.fields() {
        let field_path = make_path(path_prefix, field_name);

        // JSON null is treated the same as an absent field
        match obj.get(field_name).filter(|v| !v.is_null()) {
            Some(value) => {
                if let Some(normalized) =
                    check_value(value, &field_def.constraint, &field_path, violations)
                {
                    output.insert(field_name.clone(), normalized);
                }
            }
            None => {
                if let Some(default) = &field_def.default {
                    output.insert(field_name.clone(), default.clone());
                } else if field_def.required {
                    violations.push(FieldViolation::missing(field_path));
                }
            }
        }
    }

    output
}

/// Checks one present value against its constraint.
///
/// Records every violation encountered for the field, in a fixed order,
/// and returns the normalized value when all checks pass.
fn check_value(
    value: &Value,
    constraint: &Constraint,
    field_path: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Value> {
    match constraint {
        Constraint::Format(format) => check_format(value, *format, field_path, violations),
        Constraint::Text { min, max } => check_text(value, *min, *max, field_path, violations),
        Constraint::Integer { min, max } => {
            check_integer(value, *min, *max, field_path, violations)
        }
        Constraint::OneOf(allowed) => check_one_of(value, allowed, field_path, violations),
        Constraint::Boolean => match value.as_bool() {
            Some(b) => Some(Value::Bool(b)),
            None => {
                violations.push(FieldViolation::new(field_path, "must be a boolean"));
                None
            }
        },
        Constraint::Nested(schema) => match value.as_object() {
            Some(obj) => {
                let before = violations.len();
                let nested = validate_object(schema, obj, field_path, violations);
                (violations.len() == before).then(|| Value::Object(nested))
            }
            None => {
                violations.push(FieldViolation::new(field_path, "must be an object"));
                None
            }
        },
    }
}

fn check_format(
    value: &Value,
    format: StringFormat,
    field_path: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Value> {
    let s = match value.as_str() {
        Some(s) => s,
        None => {
            violations.push(FieldViolation::new(field_path, "must be a string"));
            return None;
        }
    };

    let well_formed = match format {
        StringFormat::Identifier => is_identifier(s),
        StringFormat::Email => is_email(s),
        StringFormat::DateTime => is_datetime(s),
    };

    if well_formed {
        Some(Value::String(s.to_string()))
    } else {
        violations.push(FieldViolation::new(field_path, format.failure_message()));
        None
    }
}

fn check_text(
    value: &Value,
    min: usize,
    max: Option<usize>,
    field_path: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Value> {
    let s = match value.as_str() {
        Some(s) => s,
        None => {
            violations.push(FieldViolation::new(field_path, "must be a string"));
            return None;
        }
    };

    let len = s.chars().count();
    let before = violations.len();

    if len < min {
        violations.push(FieldViolation::new(
            field_path,
            format!("must be at least {} characters", min),
        ));
    }
    if let Some(max) = max {
        if len > max {
            violations.push(FieldViolation::new(
                field_path,
                format!("must be at most {} characters", max),
            ));
        }
    }

    (violations.len() == before).then(|| Value::String(s.to_string()))
}

fn check_integer(
    value: &Value,
    min: Option<i64>,
    max: Option<i64>,
    field_path: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Value> {
    let n = match coerce_integer(value) {
        Some(n) => n,
        None => {
            violations.push(FieldViolation::new(field_path, "must be an integer"));
            return None;
        }
    };

    let before = violations.len();

    if let Some(min) = min {
        if n < min {
            violations.push(FieldViolation::new(
                field_path,
                format!("must be at least {}", min),
            ));
        }
    }
    if let Some(max) = max {
        if n > max {
            violations.push(FieldViolation::new(
                field_path,
                format!("must be at most {}", max),
            ));
        }
    }

    (violations.len() == before).then(|| Value::from(n))
}

fn check_one_of(
    value: &Value,
    allowed: &[&str],
    field_path: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Value> {
    if let Some(s) = value.as_str() {
        if allowed.contains(&s) {
            return Some(Value::String(s.to_string()));
        }
    }

    violations.push(FieldViolation::new(
        field_path,
        format!("must be one of: {}", allowed.join(", ")),
    ));
    None
}

/// Creates a field path from prefix and field name
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldDef;
    use serde_json::json;

    fn note_schema() -> Schema {
        Schema::new("note")
            .field("reportId", FieldDef::required_identifier())
            .field("itemId", FieldDef::required_text(1, Some(100)))
            .field("note", FieldDef::required_text(1, Some(5000)))
    }

    const REPORT_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_valid_input_passes() {
        let input = json!({
            "reportId": REPORT_ID,
            "itemId": "line-4",
            "note": "Verified against the source ledger."
        });

        let normalized = validate(&note_schema(), &input).unwrap();
        assert_eq!(normalized, input);
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let err = validate(&note_schema(), &json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "reportId: field is required, itemId: field is required, note: field is required"
        );
    }

    #[test]
    fn test_violations_follow_declaration_order() {
        let input = json!({
            "reportId": "nope",
            "itemId": "",
            "note": "fine"
        });

        let err = validate(&note_schema(), &input).unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["reportId", "itemId"]);
        assert_eq!(err.violations()[0].message, "Invalid identifier format");
        assert_eq!(err.violations()[1].message, "must be at least 1 characters");
    }

    #[test]
    fn test_extraneous_fields_dropped() {
        let input = json!({
            "reportId": REPORT_ID,
            "itemId": "line-4",
            "note": "ok",
            "role": "admin"
        });

        let normalized = validate(&note_schema(), &input).unwrap();
        assert!(normalized.get("role").is_none());
    }

    #[test]
    fn test_null_treated_as_absent() {
        let schema = Schema::new("s")
            .field("a", FieldDef::required_text(1, None))
            .field("b", FieldDef::optional_text(0, Some(10)));

        let err = validate(&schema, &json!({ "a": null, "b": null })).unwrap_err();
        assert_eq!(err.to_string(), "a: field is required");
    }

    #[test]
    fn test_defaults_substituted() {
        let schema = Schema::new("pagination")
            .field("page", FieldDef::optional_integer(Some(1), None).with_default(1))
            .field(
                "limit",
                FieldDef::optional_integer(Some(1), Some(100)).with_default(20),
            );

        let normalized = validate(&schema, &json!({})).unwrap();
        assert_eq!(normalized, json!({ "page": 1, "limit": 20 }));
    }

    #[test]
    fn test_integer_coerced_from_string() {
        let schema =
            Schema::new("s").field("page", FieldDef::optional_integer(Some(1), None).with_default(1));

        let normalized = validate(&schema, &json!({ "page": "3" })).unwrap();
        assert_eq!(normalized, json!({ "page": 3 }));
    }

    #[test]
    fn test_integer_bounds() {
        let schema = Schema::new("s").field(
            "limit",
            FieldDef::optional_integer(Some(1), Some(100)).with_default(20),
        );

        let err = validate(&schema, &json!({ "limit": 101 })).unwrap_err();
        assert_eq!(err.to_string(), "limit: must be at most 100");

        let err = validate(&schema, &json!({ "limit": 0 })).unwrap_err();
        assert_eq!(err.to_string(), "limit: must be at least 1");

        let err = validate(&schema, &json!({ "limit": "many" })).unwrap_err();
        assert_eq!(err.to_string(), "limit: must be an integer");
    }

    #[test]
    fn test_enum_membership() {
        let schema = Schema::new("checkout")
            .field("plan", FieldDef::required_choice(&["monthly", "yearly"]));

        assert!(validate(&schema, &json!({ "plan": "monthly" })).is_ok());

        let err = validate(&schema, &json!({ "plan": "weekly" })).unwrap_err();
        assert_eq!(err.to_string(), "plan: must be one of: monthly, yearly");

        // Non-string values fail the same membership check
        let err = validate(&schema, &json!({ "plan": 5 })).unwrap_err();
        assert_eq!(err.to_string(), "plan: must be one of: monthly, yearly");
    }

    #[test]
    fn test_boolean_strictness() {
        let schema = Schema::new("s").field("verified", FieldDef::required_bool());

        assert!(validate(&schema, &json!({ "verified": true })).is_ok());

        let err = validate(&schema, &json!({ "verified": "true" })).unwrap_err();
        assert_eq!(err.to_string(), "verified: must be a boolean");
    }

    #[test]
    fn test_non_object_input_rejected() {
        let err = validate(&note_schema(), &json!("just a string")).unwrap_err();
        assert_eq!(err.to_string(), "$root: must be an object");
    }

    #[test]
    fn test_nested_schema_paths_are_dot_joined() {
        let address = Schema::new("address")
            .field("city", FieldDef::required_text(1, Some(100)))
            .field("zip", FieldDef::required_text(1, Some(20)));
        let schema = Schema::new("firm")
            .field("name", FieldDef::required_text(1, Some(200)))
            .field("address", FieldDef::required_nested(address));

        let input = json!({
            "name": "Acme Audit LLP",
            "address": { "city": "Lagos" }
        });

        let err = validate(&schema, &input).unwrap_err();
        assert_eq!(err.to_string(), "address.zip: field is required");

        let ok = json!({
            "name": "Acme Audit LLP",
            "address": { "city": "Lagos", "zip": "100001" }
        });
        assert_eq!(validate(&schema, &ok).unwrap(), ok);
    }

    #[test]
    fn test_text_type_mismatch() {
        let schema = Schema::new("s").field("search", FieldDef::optional_text(0, Some(200)));
        let err = validate(&schema, &json!({ "search": 12 })).unwrap_err();
        assert_eq!(err.to_string(), "search: must be a string");
    }

    #[test]
    fn test_revalidating_normalized_output_is_stable() {
        let schema = Schema::new("pagination")
            .field("page", FieldDef::optional_integer(Some(1), None).with_default(1))
            .field(
                "limit",
                FieldDef::optional_integer(Some(1), Some(100)).with_default(20),
            );

        let first = validate(&schema, &json!({ "page": "3", "extra": true })).unwrap();
        let second = validate(&schema, &first).unwrap();
        assert_eq!(first, second);
    }
}
