//! List shows command handler

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_list_shows(config: &Config) -> anyhow::Result<()> {
    let shared = SharedState::new(config.clone()).await?;
    let shows = shared.show_service.list_shows().await?;

    if shows.is_empty() {
        println!("No shows in the catalog.");
        println!();
        println!("Import some with: showcase import shows.json");
        return Ok(());
    }

    println!("Shows ({} total)", shows.len());
    println!("{:-<60}", "");

    for show in shows {
        println!("[{}] {} - {}", show.id, show.title, show.year);
    }

    Ok(())
}
