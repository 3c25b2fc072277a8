use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::catalog::SeriesSummary;
use crate::error::Result;
use crate::types::ids::{SeriesID, UserID};

/// The many-to-many series ↔ user favorites relation.
///
/// A (series, user) pair is stored at most once.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Favorites of `user_id`, rating descending.
    async fn list_favorite_series(
        &self,
        user_id: UserID,
    ) -> Result<Vec<SeriesSummary>>;

    async fn is_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool>;

    /// Returns `false` when the pair was already present.
    async fn add_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool>;

    /// Returns `false` when the pair was absent.
    async fn remove_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool>;
}
