//! Declarative payload schemas
//!
//! A [`Schema`] is an ordered list of field rules (name, kind, required)
//! interpreted by a generic validator. Validation produces either the
//! coerced payload, filtered to the declared fields, or the full list of
//! field-level violations.

use serde_json::{Map, Value};

use crate::core::error::FieldViolation;

/// Expected kind of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-empty JSON string
    Text,

    /// A non-negative integer; numeric strings are coerced
    Count,
}

/// Declares one field of a payload
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Validate and coerce one field value
    fn check(&self, value: &Value) -> Result<Value, FieldViolation> {
        match self.kind {
            FieldKind::Text => match value.as_str() {
                Some(s) if !s.is_empty() => Ok(Value::String(s.to_string())),
                Some(_) => Err(FieldViolation::new(self.name, "must not be empty")),
                None => Err(FieldViolation::new(self.name, "must be a string")),
            },
            FieldKind::Count => coerce_count(value)
                .map(Into::into)
                .ok_or_else(|| FieldViolation::new(self.name, "must be a non-negative integer")),
        }
    }
}

/// Coerce a JSON value to a non-negative integer
///
/// Accepts integer numbers, floats with no fractional part, and numeric
/// strings ("5"). Everything else is rejected.
fn coerce_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
            return Some(f as u64);
        }
        return None;
    }
    value.as_str().and_then(|s| s.trim().parse::<u64>().ok())
}

/// A declarative description of an expected payload shape
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRule>,
}

impl Schema {
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self { fields }
    }

    /// Validate a raw payload against this schema
    ///
    /// Returns the coerced object containing only the declared fields, or
    /// every field-level violation found. Unknown fields are dropped.
    pub fn validate(&self, payload: Value) -> Result<Value, Vec<FieldViolation>> {
        let Value::Object(input) = payload else {
            return Err(vec![FieldViolation::new("body", "must be a JSON object")]);
        };

        let mut output = Map::new();
        let mut violations = Vec::new();

        for rule in &self.fields {
            match input.get(rule.name) {
                None | Some(Value::Null) => {
                    if rule.required {
                        violations.push(FieldViolation::new(rule.name, "is required"));
                    }
                }
                Some(value) => match rule.check(value) {
                    Ok(coerced) => {
                        output.insert(rule.name.to_string(), coerced);
                    }
                    Err(violation) => violations.push(violation),
                },
            }
        }

        if violations.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(violations)
        }
    }
}
