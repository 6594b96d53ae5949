//! Schema and constraint definitions
//!
//! Supported constraints:
//! - format: fixed string formats (identifier, email, ISO-8601 date-time)
//! - text: UTF-8 string with character-count bounds
//! - integer: 64-bit signed integer, coercible from string input
//! - one-of: membership in a fixed value set
//! - boolean
//! - nested: object validated against a sub-schema

use serde_json::Value;

/// Fixed string formats checked by the primitives module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    /// Canonical 36-character hyphenated hexadecimal identifier
    Identifier,
    /// Email address: local part, `@`, domain containing a dot
    Email,
    /// ISO-8601 date or date-time
    DateTime,
}

impl StringFormat {
    /// Returns the fixed message shown when the format check fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            StringFormat::Identifier => "Invalid identifier format",
            StringFormat::Email => "Invalid email format",
            StringFormat::DateTime => "Invalid date format",
        }
    }
}

/// A single checkable rule on a field's value
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// String matching a fixed format
    Format(StringFormat),
    /// String with character-count bounds; `max` of `None` means unbounded
    Text { min: usize, max: Option<usize> },
    /// Integer with optional bounds; string input is coerced
    Integer { min: Option<i64>, max: Option<i64> },
    /// Membership in a fixed set of allowed values
    OneOf(&'static [&'static str]),
    /// Boolean
    Boolean,
    /// Nested object with its own schema (boxed to allow recursion)
    Nested(Box<Schema>),
}

/// Field definition: one constraint plus presence rules
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Constraint checked when the field is present
    pub constraint: Constraint,
    /// Whether absence is a violation
    pub required: bool,
    /// Value substituted when the field is absent
    pub default: Option<Value>,
}

impl FieldDef {
    fn required_with(constraint: Constraint) -> Self {
        Self {
            constraint,
            required: true,
            default: None,
        }
    }

    fn optional_with(constraint: Constraint) -> Self {
        Self {
            constraint,
            required: false,
            default: None,
        }
    }

    /// Create a required identifier field
    pub fn required_identifier() -> Self {
        Self::required_with(Constraint::Format(StringFormat::Identifier))
    }

    /// Create a required email field
    pub fn required_email() -> Self {
        Self::required_with(Constraint::Format(StringFormat::Email))
    }

    /// Create an optional ISO-8601 date field
    pub fn optional_datetime() -> Self {
        Self::optional_with(Constraint::Format(StringFormat::DateTime))
    }

    /// Create a required text field.
    ///
    /// `min` must be at least 1: a required string field rejects the
    /// empty string.
    pub fn required_text(min: usize, max: Option<usize>) -> Self {
        debug_assert!(min >= 1, "required text fields reject the empty string");
        if let Some(max) = max {
            debug_assert!(min <= max);
        }
        Self::required_with(Constraint::Text { min, max })
    }

    /// Create an optional text field
    pub fn optional_text(min: usize, max: Option<usize>) -> Self {
        if let Some(max) = max {
            debug_assert!(min <= max);
        }
        Self::optional_with(Constraint::Text { min, max })
    }

    /// Create a required integer field
    pub fn required_integer(min: Option<i64>, max: Option<i64>) -> Self {
        if let (Some(min), Some(max)) = (min, max) {
            debug_assert!(min <= max);
        }
        Self::required_with(Constraint::Integer { min, max })
    }

    /// Create an optional integer field
    pub fn optional_integer(min: Option<i64>, max: Option<i64>) -> Self {
        if let (Some(min), Some(max)) = (min, max) {
            debug_assert!(min <= max);
        }
        Self::optional_with(Constraint::Integer { min, max })
    }

    /// Create a required enumerated field
    pub fn required_choice(allowed: &'static [&'static str]) -> Self {
        Self::required_with(Constraint::OneOf(allowed))
    }

    /// Create an optional enumerated field
    pub fn optional_choice(allowed: &'static [&'static str]) -> Self {
        Self::optional_with(Constraint::OneOf(allowed))
    }

    /// Create a required boolean field
    pub fn required_bool() -> Self {
        Self::required_with(Constraint::Boolean)
    }

    /// Create a required nested-object field
    pub fn required_nested(schema: Schema) -> Self {
        Self::required_with(Constraint::Nested(Box::new(schema)))
    }

    /// Create an optional nested-object field
    pub fn optional_nested(schema: Schema) -> Self {
        Self::optional_with(Constraint::Nested(Box::new(schema)))
    }

    /// Attach a default substituted when the field is absent.
    ///
    /// A defaulted field is never reported missing.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }
}

/// Immutable, named description of one input shape.
///
/// Fields are kept in declaration order; violation reports follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: String,
    fields: Vec<(String, FieldDef)>,
}

impl Schema {
    /// Create an empty schema with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field definition.
    ///
    /// Field names must be unique within a schema.
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        let name = name.into();
        debug_assert!(
            !self.has_field(&name),
            "duplicate field '{}' in schema '{}'",
            name,
            self.name
        );
        self.fields.push((name, def));
        self
    }

    /// Merge another schema's fields into this one (field-set union).
    ///
    /// Composition happens at construction time; the merged fields keep
    /// their constraints and are appended after this schema's own fields.
    pub fn merge(mut self, other: &Schema) -> Self {
        for (name, def) in &other.fields {
            debug_assert!(
                !self.has_field(name),
                "duplicate field '{}' merging '{}' into '{}'",
                name,
                other.name,
                self.name
            );
            self.fields.push((name.clone(), def.clone()));
        }
        self
    }

    /// Returns the schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field definitions in declaration order
    pub fn fields(&self) -> &[(String, FieldDef)] {
        &self.fields
    }

    fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }
}
