//! Loading portfolio projects from a JSON file into the store.
//!
//! Projects are never created through the HTTP API; this is the tooling
//! path that fills the `project` collection.

use anyhow::{bail, Context};
use folio_core::project::PROJECT_SCHEMA;
use folio_core::Project;
use folio_db::{StorageError, StoreHandle};
use serde_json::Value;

/// Parse a JSON array of project objects and validate every entry.
///
/// Fails on the first invalid entry, listing all of its violations.
pub fn parse_projects(json: &str) -> anyhow::Result<Vec<Project>> {
    let entries: Vec<Value> =
        serde_json::from_str(json).context("seed file must be a JSON array of projects")?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let Value::Object(data) = entry else {
                bail!("entry {index} is not a JSON object");
            };
            Project::from_map(data).with_context(|| format!("entry {index} is invalid"))
        })
        .collect()
}

/// Insert `projects` in order, returning the generated ids.
///
/// Stops at the first failed write; earlier inserts stay in place.
pub async fn seed_projects(
    store: &StoreHandle,
    projects: &[Project],
) -> Result<Vec<String>, StorageError> {
    let mut ids = Vec::with_capacity(projects.len());
    for project in projects {
        let id = store
            .create_document(PROJECT_SCHEMA.collection, project)
            .await?;
        tracing::debug!(%id, title = %project.title, "Project seeded");
        ids.push(id);
    }
    Ok(ids)
}
