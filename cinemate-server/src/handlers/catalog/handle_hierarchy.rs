use axum::{
    Json,
    extract::{Path, State},
};
use cinemate_core::domain::catalog::{Episode, Season};
use cinemate_core::types::ids::{EpisodeID, SeasonID, SeriesID};

use super::parse_path_id;
use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn get_seasons_handler(
    State(state): State<AppState>,
    Path(series): Path<String>,
) -> AppResult<Json<Vec<Season>>> {
    let series_id: SeriesID = parse_path_id(&series, "series")?;
    Ok(Json(state.navigator.get_seasons(series_id).await?))
}

pub async fn list_episodes_handler(
    State(state): State<AppState>,
    Path((series, season)): Path<(String, String)>,
) -> AppResult<Json<Vec<Episode>>> {
    let series_id: SeriesID = parse_path_id(&series, "series")?;
    let season_id: SeasonID = parse_path_id(&season, "season")?;
    Ok(Json(state.navigator.list_episodes(series_id, season_id).await?))
}

pub async fn get_episode_handler(
    State(state): State<AppState>,
    Path((series, season, episode)): Path<(String, String, String)>,
) -> AppResult<Json<Episode>> {
    let series_id: SeriesID = parse_path_id(&series, "series")?;
    let season_id: SeasonID = parse_path_id(&season, "season")?;
    let episode_id: EpisodeID = parse_path_id(&episode, "episode")?;
    Ok(Json(
        state
            .navigator
            .get_episode(series_id, season_id, episode_id)
            .await?,
    ))
}
