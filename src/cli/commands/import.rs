//! Import command handler
//!
//! Administrative create path: the HTTP API never writes, so this is how
//! rows get into the catalog.

use anyhow::Context;
use std::path::Path;

use crate::config::Config;
use crate::models::show::NewShow;
use crate::services::SeaOrmShowService;
use crate::state::SharedState;

pub async fn cmd_import_shows(config: &Config, path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;

    let new_shows: Vec<NewShow> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {}", path.display()))?;

    if new_shows.is_empty() {
        println!("Nothing to import.");
        return Ok(());
    }

    let shared = SharedState::new(config.clone()).await?;
    let service = SeaOrmShowService::new(shared.store.clone());
    let stored = service.import_shows(&new_shows).await?;

    for show in &stored {
        println!("  + [{}] {}", show.id, show);
    }
    println!("✓ Imported {} shows", stored.len());

    Ok(())
}
