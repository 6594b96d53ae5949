//! Schema validation subsystem
//!
//! Every externally supplied payload is checked against a named,
//! declarative schema before it reaches business logic.
//!
//! # Design Principles
//!
//! - Schemas are immutable tagged-variant trees built once at startup
//! - One generic interpreter evaluates every schema
//! - A pass collects all violations across all fields, in declaration
//!   order, and joins them into one user-facing message
//! - Success returns a normalized value: defaults substituted, integers
//!   coerced, undeclared fields dropped
//! - Deterministic, pure, no shared mutable state

mod errors;
mod primitives;
mod registry;
mod types;
mod validator;

pub use errors::{FieldViolation, RegistryError, ValidationError, ValidationResult};
pub use registry::{
    SchemaRegistry, BILLING_PLANS, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, REPORT_STATUSES,
};
pub use types::{Constraint, FieldDef, Schema, StringFormat};
pub use validator::validate;
