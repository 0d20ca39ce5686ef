use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmShowService, ShowService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub show_service: Arc<dyn ShowService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let show_service =
            Arc::new(SeaOrmShowService::new(store.clone())) as Arc<dyn ShowService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            show_service,
        })
    }
}
