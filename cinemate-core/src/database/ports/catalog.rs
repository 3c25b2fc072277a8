use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::catalog::{
    Episode, PageWindow, Season, SeriesDetails, SeriesSummary,
};
use crate::error::Result;
use crate::types::ids::{EpisodeID, SeasonID, SeriesID};

/// Read access to the series → season → episode hierarchy.
///
/// Every list is returned already ordered: series pages by title ascending,
/// featured series by rating descending, seasons and episodes by number.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_series_page(
        &self,
        window: PageWindow,
    ) -> Result<Vec<SeriesSummary>>;

    async fn list_featured_series(&self) -> Result<Vec<SeriesSummary>>;

    async fn get_series(
        &self,
        series_id: SeriesID,
    ) -> Result<Option<SeriesDetails>>;

    async fn series_exists(&self, series_id: SeriesID) -> Result<bool>;

    async fn list_seasons(&self, series_id: SeriesID) -> Result<Vec<Season>>;

    /// Season only if it belongs to `series_id`.
    async fn find_season(
        &self,
        series_id: SeriesID,
        season_id: SeasonID,
    ) -> Result<Option<Season>>;

    async fn list_episodes(&self, season_id: SeasonID) -> Result<Vec<Episode>>;

    /// Episode only if it belongs to `season_id`.
    async fn find_episode(
        &self,
        season_id: SeasonID,
        episode_id: EpisodeID,
    ) -> Result<Option<Episode>>;
}
