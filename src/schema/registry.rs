//! Named schema registry
//!
//! One schema per external input shape, constructed once at startup and
//! never mutated afterwards. Route handlers select a schema by name and
//! hand the raw payload to [`SchemaRegistry::validate`].

use std::collections::HashMap;

use serde_json::Value;

use super::errors::{RegistryError, ValidationError, ValidationResult};
use super::types::{FieldDef, Schema};
use super::validator;

/// Report lifecycle states accepted by update and filter payloads
pub const REPORT_STATUSES: &[&str] = &["draft", "reviewed", "sent"];

/// Billing plans accepted at checkout
pub const BILLING_PLANS: &[&str] = &["monthly", "yearly"];

/// First page returned when a listing request omits `page`
pub const DEFAULT_PAGE: i64 = 1;

/// Page size applied when a listing request omits `limit`
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a caller may request
pub const MAX_LIMIT: i64 = 100;

/// Registry of named schemas.
///
/// Registered schemas are immutable: a name can be bound once.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry of production input shapes.
    ///
    /// Registered names: `report-id`, `report-update`, `note`,
    /// `verification`, `checkout`, `signup`, `login`, `profile-update`,
    /// `pagination`, `report-filter`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        let pagination = Schema::new("pagination")
            .field(
                "page",
                FieldDef::optional_integer(Some(DEFAULT_PAGE), None).with_default(DEFAULT_PAGE),
            )
            .field(
                "limit",
                FieldDef::optional_integer(Some(1), Some(MAX_LIMIT)).with_default(DEFAULT_LIMIT),
            );

        let report_filter = Schema::new("report-filter")
            .field("status", FieldDef::optional_choice(REPORT_STATUSES))
            .field("search", FieldDef::optional_text(0, Some(200)))
            .field("startDate", FieldDef::optional_datetime())
            .field("endDate", FieldDef::optional_datetime())
            .merge(&pagination);

        let schemas = [
            Schema::new("report-id").field("id", FieldDef::required_identifier()),
            Schema::new("report-update")
                .field("id", FieldDef::required_identifier())
                .field("status", FieldDef::optional_choice(REPORT_STATUSES))
                .field("notes", FieldDef::optional_text(0, Some(10000))),
            Schema::new("note")
                .field("reportId", FieldDef::required_identifier())
                .field("itemId", FieldDef::required_text(1, Some(100)))
                .field("note", FieldDef::required_text(1, Some(5000))),
            Schema::new("verification")
                .field("reportId", FieldDef::required_identifier())
                .field("itemId", FieldDef::required_text(1, Some(100)))
                .field("verified", FieldDef::required_bool()),
            Schema::new("checkout").field("plan", FieldDef::required_choice(BILLING_PLANS)),
            Schema::new("signup")
                .field("email", FieldDef::required_email())
                .field("password", FieldDef::required_text(8, Some(100)))
                .field("fullName", FieldDef::optional_text(1, Some(100)))
                .field("firmName", FieldDef::optional_text(0, Some(200))),
            Schema::new("login")
                .field("email", FieldDef::required_email())
                .field("password", FieldDef::required_text(1, None)),
            Schema::new("profile-update")
                .field("fullName", FieldDef::optional_text(0, Some(100)))
                .field("firmName", FieldDef::optional_text(0, Some(200)))
                .field("phone", FieldDef::optional_text(0, Some(20))),
            pagination,
            report_filter,
        ];

        for schema in schemas {
            registry.schemas.insert(schema.name().to_string(), schema);
        }

        registry
    }

    /// Registers a schema.
    ///
    /// Fails if the name is already bound; registered schemas are
    /// immutable.
    pub fn register(&mut self, schema: Schema) -> Result<(), RegistryError> {
        if self.schemas.contains_key(schema.name()) {
            return Err(RegistryError::duplicate(schema.name()));
        }
        self.schemas.insert(schema.name().to_string(), schema);
        Ok(())
    }

    /// Gets a schema by name
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Checks whether a schema name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the number of registered schemas
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Returns the registered schema names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Validates a raw value against the named schema.
    ///
    /// An unregistered name yields a deterministic failure; it is a
    /// wiring mistake in the caller, not bad client data.
    pub fn validate(&self, name: &str, input: &Value) -> ValidationResult {
        match self.get(name) {
            Some(schema) => validator::validate(schema, input),
            None => Err(ValidationError::single(
                "schema",
                format!("unknown schema '{}'", name),
            )),
        }
    }
}
