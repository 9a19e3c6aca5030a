//! Validation system
//!
//! Declarative schemas describe the expected shape of request payloads;
//! a generic validator interprets them before anything reaches the
//! handlers. New fields and operations extend by declaration.

pub mod extractor;
pub mod schema;

pub use extractor::{Validated, ValidatedPayload};
pub use schema::{FieldKind, FieldRule, Schema};
