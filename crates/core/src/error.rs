use serde::Serialize;
use serde_json::Value;

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    /// Machine-readable constraint name (`required`, `type`, `min_length`,
    /// `max_length`, `email`).
    pub constraint: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldViolation {
    pub fn new(
        field: &str,
        constraint: &'static str,
        message: impl Into<String>,
        value: Option<&Value>,
    ) -> Self {
        Self {
            field: field.to_string(),
            constraint,
            message: message.into(),
            value: value.cloned(),
        }
    }
}

/// A payload failed one or more constraints of its record kind.
///
/// Always carries every violation found, never just the first one.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{record} failed validation: {}", summarize(.violations))]
pub struct ValidationError {
    pub record: &'static str,
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Whether any violation targets `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.field, v.constraint))
        .collect::<Vec<_>>()
        .join(", ")
}
