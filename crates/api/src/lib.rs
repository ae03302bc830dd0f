//! Portfolio API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! router) so integration tests, the server binary and the seeding tool
//! can all access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
pub mod telemetry;
