//! Domain service for reading the show catalog.
//!
//! Handlers go through [`ShowService`] instead of touching the store, and the
//! serializer functions here are the single place a stored [`Show`] becomes
//! its wire form.

use crate::api::types::ShowDto;
use crate::domain::ShowId;
use crate::models::show::Show;
use thiserror::Error;

/// Domain errors for show operations.
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("Show not found: {0}")]
    NotFound(ShowId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ShowError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Read access to the catalog.
///
/// # Examples
///
/// ```rust,ignore
/// use showcase::services::{ShowService, ShowError};
/// use showcase::domain::ShowId;
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn ShowService>) -> Result<(), ShowError> {
///     let _show = service.get_show(ShowId::new(1)).await?;
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait ShowService: Send + Sync {
    /// Lists every show in the catalog, serialized.
    ///
    /// # Errors
    ///
    /// Returns [`ShowError::Database`] on connection failures.
    async fn list_shows(&self) -> Result<Vec<ShowDto>, ShowError>;

    /// Retrieves a single serialized show.
    ///
    /// # Errors
    ///
    /// - Returns [`ShowError::NotFound`] if no show has this id
    /// - Returns [`ShowError::Database`] on connection failures
    async fn get_show(&self, id: ShowId) -> Result<ShowDto, ShowError>;
}

/// Serializes one show. Every column is carried over under its own name.
#[must_use]
pub fn show_to_dto(show: Show) -> ShowDto {
    ShowDto {
        id: show.id.value(),
        title: show.title,
        image: show.image,
        year: show.year,
        number_of_seasons: show.number_of_seasons,
        worth_a_watch: show.worth_a_watch,
        album_name: show.album_name,
        duration: show.duration,
        artist: show.artist,
        created: show.created,
    }
}

/// Serializes a collection of shows, keeping their order.
pub fn shows_to_dtos(shows: impl IntoIterator<Item = Show>) -> Vec<ShowDto> {
    shows.into_iter().map(show_to_dto).collect()
}
