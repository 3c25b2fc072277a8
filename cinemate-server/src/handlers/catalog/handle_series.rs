use std::str::FromStr;

use axum::{
    Json,
    extract::{Extension, Path, State},
    response::{IntoResponse, Response},
};
use cinemate_core::domain::catalog::SeriesSummary;
use cinemate_core::domain::users::auth::AuthenticatedUser;
use cinemate_core::types::ids::SeriesID;
use tracing::debug;
use uuid::Uuid;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// The shared `/series/{series}` segment: a page number or a series id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKey {
    Page(i64),
    Id(SeriesID),
}

impl FromStr for SeriesKey {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if let Ok(page) = raw.parse::<i64>() {
            return Ok(SeriesKey::Page(page));
        }
        if let Some(page) = saturated_page(raw) {
            return Ok(SeriesKey::Page(page));
        }
        Uuid::parse_str(raw)
            .map(|id| SeriesKey::Id(SeriesID::from_uuid(id)))
            .map_err(|_| AppError::bad_request("Invalid series key"))
    }
}

/// An integer too large for `i64` still names a page, just one past any end.
fn saturated_page(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// `GET /series/{series}`: a listing page or one series in full.
pub async fn get_series_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Response> {
    match key.parse::<SeriesKey>()? {
        SeriesKey::Page(page_number) => {
            debug!(page_number, "listing series page");
            let page = state.listing.list_series(page_number).await?;
            Ok(Json(page).into_response())
        }
        SeriesKey::Id(series_id) => {
            debug!(%series_id, "fetching series details");
            let details = state.navigator.get_series(series_id).await?;
            Ok(Json(details).into_response())
        }
    }
}

pub async fn featured_series_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SeriesSummary>>> {
    Ok(Json(state.listing.featured_series().await?))
}

pub async fn favorite_series_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<SeriesSummary>>> {
    Ok(Json(state.listing.favorite_series(&caller).await?))
}
