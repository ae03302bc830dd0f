//! Record kinds of the portfolio backend and their validation rules.
//!
//! Pure logic, no I/O. The HTTP layer hands raw JSON objects to
//! [`Inquiry::from_map`] / [`Project::from_map`] and only ever passes the
//! validated records on to the persistence layer.

pub mod error;
pub mod inquiry;
pub mod limits;
pub mod project;
pub mod schema;

pub use error::{FieldViolation, ValidationError};
pub use inquiry::Inquiry;
pub use project::Project;
pub use schema::{FieldKind, FieldSpec, RecordSchema};

/// Every record kind known to the system, in collection order.
pub static RECORD_SCHEMAS: [&RecordSchema; 2] = [&inquiry::INQUIRY_SCHEMA, &project::PROJECT_SCHEMA];
