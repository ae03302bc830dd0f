//! Field descriptors shared by validation and the schema explorer.
//!
//! A [`RecordSchema`] pairs the table of [`FieldSpec`]s enforced by
//! [`RecordSchema::check`] with the `schemars` generator for the record's
//! published JSON Schema.

use schemars::schema::RootSchema;
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::error::FieldViolation;

/// Value type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// A string that must be a syntactically valid email address.
    Email,
    /// An ordered list of strings.
    StringList,
}

/// Declaration of one field of a record kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    pub const fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Check a single field value. `None` means the key was absent.
    fn check(&self, value: Option<&Value>, out: &mut Vec<FieldViolation>) {
        let value = match value {
            None | Some(Value::Null) => {
                if self.required {
                    out.push(FieldViolation::new(
                        self.name,
                        "required",
                        "Field required",
                        value,
                    ));
                }
                return;
            }
            Some(v) => v,
        };

        match (self.kind, value) {
            (FieldKind::String | FieldKind::Email, Value::String(s)) => {
                self.check_length(s, value, out);
                if self.kind == FieldKind::Email && !s.validate_email() {
                    out.push(FieldViolation::new(
                        self.name,
                        "email",
                        "Value is not a valid email address",
                        Some(value),
                    ));
                }
            }
            (FieldKind::StringList, Value::Array(items)) => {
                if !items.iter().all(Value::is_string) {
                    out.push(FieldViolation::new(
                        self.name,
                        "type",
                        "Every item must be a string",
                        Some(value),
                    ));
                }
            }
            (FieldKind::StringList, _) => out.push(FieldViolation::new(
                self.name,
                "type",
                "Input should be a list of strings",
                Some(value),
            )),
            _ => out.push(FieldViolation::new(
                self.name,
                "type",
                "Input should be a string",
                Some(value),
            )),
        }
    }

    fn check_length(&self, s: &str, value: &Value, out: &mut Vec<FieldViolation>) {
        let len = s.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                out.push(FieldViolation::new(
                    self.name,
                    "min_length",
                    format!("String should have at least {min} characters"),
                    Some(value),
                ));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                out.push(FieldViolation::new(
                    self.name,
                    "max_length",
                    format!("String should have at most {max} characters"),
                    Some(value),
                ));
            }
        }
    }
}

/// Declaration of a record kind and the collection it is stored in.
#[derive(Debug)]
pub struct RecordSchema {
    pub name: &'static str,
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
    /// Produces the record's JSON Schema, usually `schema_for!` on the
    /// record type.
    pub generate: fn() -> RootSchema,
}

impl RecordSchema {
    /// Evaluate every field constraint against `data`.
    ///
    /// Keys not declared by the schema are ignored. An empty result means
    /// the record is valid.
    pub fn check(&self, data: &Map<String, Value>) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        for field in self.fields {
            field.check(data.get(field.name), &mut violations);
        }
        violations
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// JSON Schema describing this record kind.
    pub fn json_schema(&self) -> RootSchema {
        (self.generate)()
    }
}
