//! Declarative request-payload schemas.
//!
//! Each endpoint that documents a payload shape carries a `static Schema`
//! next to its method (see `collectors.rs` etc.); one generic walker checks
//! a candidate payload against it before anything touches the network.
//! Endpoints whose payload rules the vendor has not pinned down carry no
//! schema and skip validation entirely.
//!
//! Validation is deterministic and side-effect-free: the same payload and
//! schema always produce the same verdict, and a failed check guarantees no
//! request was issued.

use serde_json::{Map, Value};

use crate::error::Error;

/// Structural schema for one payload (request body or query-parameter map).
pub struct Schema {
    /// Known fields, with per-field constraints.
    pub fields: &'static [Field],
    /// When `false`, top-level keys not named in `fields` are rejected.
    pub additional_properties: bool,
    /// Mutual-exclusion groups: a group fails only when *all* of its
    /// fields are present at once.
    pub forbid_together: &'static [&'static [&'static str]],
}

/// A single field and its constraints.
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub kind: Kind,
}

impl Field {
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Self { name, required: true, kind }
    }

    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Self { name, required: false, kind }
    }
}

/// Type and range constraints for a field value.
pub enum Kind {
    String {
        /// Closed value set (`enum` in JSON-schema terms).
        allowed: Option<&'static [&'static str]>,
        min_len: Option<usize>,
        max_len: Option<usize>,
    },
    Integer {
        min: Option<i64>,
        max: Option<i64>,
    },
    Boolean,
    Object,
    Array,
    /// Array whose elements must all be objects.
    ObjectArray,
}

impl Kind {
    pub const fn string() -> Self {
        Self::String { allowed: None, min_len: None, max_len: None }
    }

    pub const fn string_max(max_len: usize) -> Self {
        Self::String { allowed: None, min_len: None, max_len: Some(max_len) }
    }

    pub const fn one_of(allowed: &'static [&'static str]) -> Self {
        Self::String { allowed: Some(allowed), min_len: None, max_len: None }
    }

    pub const fn integer() -> Self {
        Self::Integer { min: None, max: None }
    }

    pub const fn integer_min(min: i64) -> Self {
        Self::Integer { min: Some(min), max: None }
    }

    pub const fn integer_range(min: i64, max: i64) -> Self {
        Self::Integer { min: Some(min), max: Some(max) }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::String { .. } => "a string",
            Self::Integer { .. } => "an integer",
            Self::Boolean => "a boolean",
            Self::Object => "an object",
            Self::Array => "an array",
            Self::ObjectArray => "an array of objects",
        }
    }
}

impl Schema {
    /// Check `payload` against this schema.
    pub fn validate(&self, payload: &Map<String, Value>) -> Result<(), Error> {
        if !self.additional_properties {
            for key in payload.keys() {
                if !self.fields.iter().any(|f| f.name == key) {
                    return fail(format!("unknown field `{key}`"));
                }
            }
        }

        for field in self.fields {
            match payload.get(field.name) {
                None if field.required => {
                    return fail(format!("missing required field `{}`", field.name));
                }
                None => {}
                Some(value) => check_value(field, value)?,
            }
        }

        for group in self.forbid_together {
            if group.iter().all(|name| payload.contains_key(*name)) {
                return fail(format!(
                    "fields {} may not be used together",
                    group
                        .iter()
                        .map(|n| format!("`{n}`"))
                        .collect::<Vec<_>>()
                        .join(" and ")
                ));
            }
        }

        Ok(())
    }
}

fn check_value(field: &Field, value: &Value) -> Result<(), Error> {
    let name = field.name;
    match &field.kind {
        Kind::String { allowed, min_len, max_len } => {
            let Some(s) = value.as_str() else {
                return type_error(name, &field.kind, value);
            };
            if let Some(allowed) = allowed {
                if !allowed.contains(&s) {
                    return fail(format!(
                        "field `{name}`: {s:?} is not one of {allowed:?}"
                    ));
                }
            }
            let len = s.chars().count();
            if let Some(min) = min_len {
                if len < *min {
                    return fail(format!(
                        "field `{name}`: must be at least {min} characters"
                    ));
                }
            }
            if let Some(max) = max_len {
                if len > *max {
                    return fail(format!(
                        "field `{name}`: must be at most {max} characters"
                    ));
                }
            }
        }
        Kind::Integer { min, max } => {
            let Some(n) = value.as_i64() else {
                return type_error(name, &field.kind, value);
            };
            if let Some(min) = min {
                if n < *min {
                    return fail(format!("field `{name}`: must be at least {min}"));
                }
            }
            if let Some(max) = max {
                if n > *max {
                    return fail(format!("field `{name}`: must be at most {max}"));
                }
            }
        }
        Kind::Boolean => {
            if !value.is_boolean() {
                return type_error(name, &field.kind, value);
            }
        }
        Kind::Object => {
            if !value.is_object() {
                return type_error(name, &field.kind, value);
            }
        }
        Kind::Array => {
            if !value.is_array() {
                return type_error(name, &field.kind, value);
            }
        }
        Kind::ObjectArray => {
            let Some(items) = value.as_array() else {
                return type_error(name, &field.kind, value);
            };
            if !items.iter().all(Value::is_object) {
                return fail(format!(
                    "field `{name}`: every element must be an object"
                ));
            }
        }
    }
    Ok(())
}

fn fail(message: String) -> Result<(), Error> {
    Err(Error::Validation { message })
}

fn type_error(name: &str, kind: &Kind, value: &Value) -> Result<(), Error> {
    let got = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    fail(format!(
        "field `{name}`: expected {}, got {got}",
        kind.describe()
    ))
}
