//! intake - a strict, schema-driven validation gate for client input
//!
//! Every externally supplied value (API payloads, query parameters,
//! upload metadata) is checked here before it reaches business logic:
//! schemas describe each input shape, one interpreter validates raw
//! values against them, strings bound for markup are escaped, and
//! upload metadata is held to a fixed acceptance policy.

pub mod sanitize;
pub mod schema;
pub mod upload;
