pub mod contact;
pub mod diagnostics;
pub mod health;
pub mod project;
pub mod schema;
