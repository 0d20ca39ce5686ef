use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, ShowDto};
use crate::domain::ShowId;

/// `GET {mount}/`
///
/// The whole table, in id order. No paging, no filters.
pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShowDto>>, ApiError> {
    let shows = state.show_service().list_shows().await?;
    Ok(Json(shows))
}

/// `GET {mount}/{id}/`
///
/// A segment that can't be parsed as a key can't match any row either, so it
/// is reported the same way as a missing id.
pub async fn get_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ShowDto>, ApiError> {
    let show_id: ShowId = id.parse().map_err(|_| ApiError::show_not_found(&id))?;
    let show = state.show_service().get_show(show_id).await?;
    Ok(Json(show))
}
