//! Contact-form inquiries (`inquiry` collection).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::{FieldKind, FieldSpec, RecordSchema};

/// Services the contact form offers. `service` is not restricted to these.
pub const KNOWN_SERVICES: &[&str] = &["Photography", "Video", "Graphic Design", "Creative Direction"];

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 80;
pub const MESSAGE_MAX_LENGTH: usize = 2000;

pub static INQUIRY_SCHEMA: RecordSchema = RecordSchema {
    name: "Inquiry",
    collection: "inquiry",
    fields: &[
        FieldSpec::required("name", FieldKind::String)
            .length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH)),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("service", FieldKind::String),
        FieldSpec::optional("message", FieldKind::String).length(None, Some(MESSAGE_MAX_LENGTH)),
    ],
    generate: || schemars::schema_for!(Inquiry),
};

/// A validated contact-form submission.
///
/// The `schemars` attributes mirror the bounds in [`INQUIRY_SCHEMA`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Inquiry", description = "Inquiries from the contact form")]
pub struct Inquiry {
    #[schemars(length(min = 2, max = 80))]
    pub name: String,
    #[schemars(email)]
    pub email: String,
    #[schemars(
        description = "Requested service: Photography, Video, Graphic Design, Creative Direction"
    )]
    pub service: String,
    #[schemars(length(max = 2000))]
    pub message: Option<String>,
}

impl Inquiry {
    /// Validate a raw JSON object and build an [`Inquiry`] from it.
    pub fn from_map(data: &Map<String, Value>) -> Result<Self, ValidationError> {
        let violations = INQUIRY_SCHEMA.check(data);
        if !violations.is_empty() {
            return Err(ValidationError {
                record: INQUIRY_SCHEMA.name,
                violations,
            });
        }

        Ok(Self {
            name: string_field(data, "name"),
            email: string_field(data, "email"),
            service: string_field(data, "service"),
            message: data
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    pub fn has_known_service(&self) -> bool {
        KNOWN_SERVICES.contains(&self.service.as_str())
    }
}

fn string_field(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
