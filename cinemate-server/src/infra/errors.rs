use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::{error, warn};

use cinemate_core::api::types::ErrorResponse;
use cinemate_core::domain::catalog::{BrowseError, FavoritesError};

/// Client-facing text for any favorites failure other than a missing pair.
pub const FAVORITES_FAILURE_MESSAGE: &str = "Something went wrong..";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            msg: self.message,
            status: self.status.as_u16(),
        });

        (self.status, body).into_response()
    }
}

impl From<BrowseError> for AppError {
    fn from(err: BrowseError) -> Self {
        match err {
            BrowseError::Storage(source) => {
                error!(error = %source, "catalog read failed");
                Self::internal("Database operation failed")
            }
            not_found => Self::not_found(not_found.to_string()),
        }
    }
}

impl From<FavoritesError> for AppError {
    fn from(err: FavoritesError) -> Self {
        match err {
            FavoritesError::NotInFavorites { .. } => {
                Self::not_found("The serial not found in your favorite list")
            }
            FavoritesError::Storage(source) => {
                error!(error = %source, "favorites mutation failed");
                Self::not_found(FAVORITES_FAILURE_MESSAGE)
            }
            other => {
                warn!(error = %other, "favorites mutation rejected");
                Self::not_found(FAVORITES_FAILURE_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinemate_core::error::CatalogError;
    use cinemate_core::types::ids::{SeriesID, UserID};

    #[test]
    fn browse_not_found_keeps_its_message() {
        let err = AppError::from(BrowseError::NoFeaturedSeries);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "There are no featured series.");
    }

    #[test]
    fn browse_storage_failure_is_internal() {
        let err = AppError::from(BrowseError::Storage(CatalogError::Internal(
            "pool timed out".into(),
        )));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn favorites_failures_collapse_to_generic_message() {
        let missing = AppError::from(FavoritesError::SeriesNotFound(
            SeriesID::new(),
        ));
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.message, FAVORITES_FAILURE_MESSAGE);

        let storage = AppError::from(FavoritesError::Storage(
            CatalogError::Internal("deadlock".into()),
        ));
        assert_eq!(storage.message, FAVORITES_FAILURE_MESSAGE);

        let absent = AppError::from(FavoritesError::NotInFavorites {
            series_id: SeriesID::new(),
            user_id: UserID::new(),
        });
        assert_eq!(
            absent.message,
            "The serial not found in your favorite list"
        );
    }
}
