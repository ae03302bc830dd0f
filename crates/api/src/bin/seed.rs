//! `folio-seed`: load portfolio projects from a JSON file into the store.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use folio_api::{seed, telemetry};
use folio_db::DatabaseConfig;

/// Validate a JSON array of projects and insert them into the `project`
/// collection configured by `DATABASE_URL` / `DATABASE_NAME`.
#[derive(Debug, Parser)]
#[command(name = "folio-seed", version)]
struct Args {
    /// Path to a JSON file holding an array of project objects.
    file: PathBuf,

    /// Only validate the file, do not connect or write.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let args = Args::parse();

    let json = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let projects = seed::parse_projects(&json)?;
    tracing::info!(count = projects.len(), file = %args.file.display(), "Seed file validated");

    if args.dry_run {
        return Ok(());
    }

    let store = folio_db::connect(&DatabaseConfig::from_env()).await;
    if !store.is_enabled() {
        bail!("database not configured or unreachable, nothing was written");
    }

    let ids = seed::seed_projects(&store, &projects).await?;
    tracing::info!(inserted = ids.len(), "Projects seeded");
    Ok(())
}
