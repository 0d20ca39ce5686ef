//! `SeaORM` implementation of the `ShowService` trait.

use crate::api::types::ShowDto;
use crate::db::Store;
use crate::domain::ShowId;
use crate::models::show::{NewShow, Show};
use crate::services::show_service::{ShowError, ShowService, show_to_dto, shows_to_dtos};

/// SeaORM-based implementation of [`ShowService`].
pub struct SeaOrmShowService {
    store: Store,
}

impl SeaOrmShowService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Validates and stores a batch of shows in one transaction.
    ///
    /// This is the administrative write path; nothing on the HTTP surface
    /// calls it.
    pub async fn import_shows(&self, shows: &[NewShow]) -> anyhow::Result<Vec<Show>> {
        for (index, show) in shows.iter().enumerate() {
            if let Err(reason) = show.validate() {
                anyhow::bail!("Invalid show at index {index}: {reason}");
            }
        }

        self.store.add_shows(shows).await
    }
}

#[async_trait::async_trait]
impl ShowService for SeaOrmShowService {
    async fn list_shows(&self) -> Result<Vec<ShowDto>, ShowError> {
        let shows = self
            .store
            .list_shows()
            .await
            .map_err(|e| ShowError::Database(e.to_string()))?;

        Ok(shows_to_dtos(shows))
    }

    async fn get_show(&self, id: ShowId) -> Result<ShowDto, ShowError> {
        self.store
            .get_show(id)
            .await
            .map_err(|e| ShowError::Database(e.to_string()))?
            .map(show_to_dto)
            .ok_or(ShowError::NotFound(id))
    }
}
