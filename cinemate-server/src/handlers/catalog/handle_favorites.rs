use axum::{
    Json,
    extract::{Extension, Path, State},
};
use cinemate_core::api::types::MessageResponse;
use cinemate_core::domain::users::auth::AuthenticatedUser;
use cinemate_core::types::ids::SeriesID;

use super::parse_path_id;
use crate::infra::{app_state::AppState, errors::AppResult};

/// `POST /series/favorites/{id}`. Adding twice is a success both times.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let series_id: SeriesID = parse_path_id(&id, "series")?;
    let outcome = state.favorites.add(&caller, series_id).await?;
    Ok(Json(MessageResponse::new(outcome.message())))
}

/// `DELETE /series/favorites/{id}`.
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let series_id: SeriesID = parse_path_id(&id, "series")?;
    let outcome = state.favorites.remove(&caller, series_id).await?;
    Ok(Json(MessageResponse::new(outcome.message())))
}
