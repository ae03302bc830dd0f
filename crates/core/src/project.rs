//! Portfolio projects (`project` collection).
//!
//! Projects are written by seeding tools and only read back through the
//! HTTP API, so besides validation this module also knows how to
//! normalize whatever shape a stored document happens to have.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::{FieldKind, FieldSpec, RecordSchema};

/// Categories the portfolio grid groups by. `category` is not restricted to these.
pub const KNOWN_CATEGORIES: &[&str] = &["Photography", "Video", "Graphic Design"];

pub static PROJECT_SCHEMA: RecordSchema = RecordSchema {
    name: "Project",
    collection: "project",
    fields: &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("category", FieldKind::String),
        FieldSpec::required("cover_url", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
        FieldSpec::optional("tags", FieldKind::StringList),
    ],
    generate: || schemars::schema_for!(Project),
};

/// A portfolio entry as returned to callers.
///
/// Every key is always serialized: absent optional fields come out as
/// `null` (`description`) or `[]` (`tags`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(
    title = "Project",
    description = "Highlighted projects for the portfolio grid"
)]
pub struct Project {
    pub title: String,
    #[schemars(description = "Photography | Video | Graphic Design")]
    pub category: String,
    #[schemars(description = "Public image/video thumbnail URL")]
    pub cover_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Validate a raw JSON object and build a [`Project`] from it.
    pub fn from_map(data: &Map<String, Value>) -> Result<Self, ValidationError> {
        let violations = PROJECT_SCHEMA.check(data);
        if !violations.is_empty() {
            return Err(ValidationError {
                record: PROJECT_SCHEMA.name,
                violations,
            });
        }
        Ok(Self::normalize(data))
    }

    /// Build a [`Project`] from a stored document without failing.
    ///
    /// Missing or mistyped text fields become `""`, a missing description
    /// becomes `None` and missing tags become an empty list. Non-string tag
    /// entries are dropped. Store-added keys (`id`, timestamps) are ignored.
    pub fn normalize(doc: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            doc.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: text("title"),
            category: text("category"),
            cover_url: text("cover_url"),
            description: doc
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            tags: doc
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn has_known_category(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.category.as_str())
    }
}
