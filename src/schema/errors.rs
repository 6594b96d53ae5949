//! Validation failure reporting
//!
//! A validation pass collects one `FieldViolation` per unmet constraint
//! and joins them into a single aggregated message. The joined format is
//! a compatibility contract: callers display it verbatim, so the text of
//! each template and the `", "` separator must not change.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One constraint failing for one field.
///
/// The path is the dot-joined field name sequence (`"address.city"` for
/// nested schemas). Violations live for a single validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Dot-joined field path
    pub path: String,
    /// Fixed message template describing the unmet constraint
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Violation for an absent required field
    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(path, "field is required")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Aggregated validation failure.
///
/// Holds every violation recorded during one pass, in recording order.
/// `Display` renders the user-facing message: violations joined with
/// `", "`, each as `"<path>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Failure carrying a single violation
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(path, message)],
        }
    }

    /// Returns the recorded violations in order
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns the aggregated user-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating one raw value against a schema
pub type ValidationResult = Result<Value, ValidationError>;

/// Error registering a schema under an already-taken name.
///
/// Schema definitions are developer-authored; this surfaces a wiring
/// mistake at startup, not a runtime data error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryError {
    name: String,
}

impl RegistryError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the contested schema name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema '{}' is already registered", self.name)
    }
}

impl std::error::Error for RegistryError {}
