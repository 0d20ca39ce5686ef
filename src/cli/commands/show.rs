use crate::config::Config;
use crate::domain::ShowId;
use crate::state::SharedState;

pub async fn cmd_show(config: &Config, id_str: &str) -> anyhow::Result<()> {
    let id: ShowId = id_str.parse()?;

    let shared = SharedState::new(config.clone()).await?;
    let show = shared.show_service.get_show(id).await?;

    println!("{}", serde_json::to_string_pretty(&show)?);
    Ok(())
}
