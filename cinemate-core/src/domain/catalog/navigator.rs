use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::errors::BrowseError;
use super::model::{Episode, Season, SeriesDetails};
use crate::application::unit_of_work::CatalogUnitOfWork;
use crate::database::ports::catalog::CatalogRepository;
use crate::types::ids::{EpisodeID, SeasonID, SeriesID};

/// Resolves series → seasons → episodes by identifier chain.
///
/// A season is only reachable through the series that owns it, and an
/// episode only through its season.
#[derive(Clone)]
pub struct HierarchyNavigator {
    catalog: Arc<dyn CatalogRepository>,
}

impl fmt::Debug for HierarchyNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyNavigator").finish_non_exhaustive()
    }
}

impl HierarchyNavigator {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub fn from_unit_of_work(unit_of_work: &CatalogUnitOfWork) -> Self {
        Self::new(Arc::clone(&unit_of_work.catalog))
    }

    pub async fn get_series(
        &self,
        series_id: SeriesID,
    ) -> Result<SeriesDetails, BrowseError> {
        self.catalog
            .get_series(series_id)
            .await?
            .ok_or(BrowseError::SeriesNotFound(series_id))
    }

    /// Seasons by number. A series without seasons yields an empty list.
    pub async fn get_seasons(
        &self,
        series_id: SeriesID,
    ) -> Result<Vec<Season>, BrowseError> {
        if !self.catalog.series_exists(series_id).await? {
            return Err(BrowseError::SeriesNotFound(series_id));
        }

        Ok(self.catalog.list_seasons(series_id).await?)
    }

    pub async fn list_episodes(
        &self,
        series_id: SeriesID,
        season_id: SeasonID,
    ) -> Result<Vec<Episode>, BrowseError> {
        let season = self
            .catalog
            .find_season(series_id, season_id)
            .await?
            .ok_or(BrowseError::SeasonMismatch {
                series_id,
                season_id,
            })?;

        Ok(self.catalog.list_episodes(season.id).await?)
    }

    pub async fn get_episode(
        &self,
        series_id: SeriesID,
        season_id: SeasonID,
        episode_id: EpisodeID,
    ) -> Result<Episode, BrowseError> {
        let Some(season) =
            self.catalog.find_season(series_id, season_id).await?
        else {
            debug!(%series_id, %season_id, "season not under series");
            return Err(BrowseError::SeasonNotFound {
                series_id,
                season_id,
            });
        };

        self.catalog
            .find_episode(season.id, episode_id)
            .await?
            .ok_or(BrowseError::EpisodeNotFound {
                season_id,
                episode_id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::infrastructure::memory::InMemoryCatalog;
    use crate::domain::catalog::Series;

    struct Fixture {
        store: InMemoryCatalog,
        navigator: HierarchyNavigator,
        series: Series,
        season_one: Season,
        season_two: Season,
        episodes: Vec<Episode>,
    }

    // Series X with seasons [1, 2]; season 1 has episodes [1, 2].
    async fn fixture() -> Fixture {
        let store = InMemoryCatalog::new();
        let series = store.seed_series("X", 7.5, false).await;
        let season_two = store.seed_season(series.id, 2).await;
        let season_one = store.seed_season(series.id, 1).await;
        let second = store.seed_episode(season_one.id, 2, "Second").await;
        let first = store.seed_episode(season_one.id, 1, "First").await;
        let navigator =
            HierarchyNavigator::from_unit_of_work(&CatalogUnitOfWork::in_memory(&store));

        Fixture {
            store,
            navigator,
            series,
            season_one,
            season_two,
            episodes: vec![first, second],
        }
    }

    #[tokio::test]
    async fn series_details_include_season_count() {
        let f = fixture().await;
        let details = f.navigator.get_series(f.series.id).await.unwrap();
        assert_eq!(details.title, "X");
        assert_eq!(details.season_count, 2);

        assert!(matches!(
            f.navigator.get_series(SeriesID::new()).await,
            Err(BrowseError::SeriesNotFound(_))
        ));
    }

    #[tokio::test]
    async fn seasons_are_ordered_by_number() {
        let f = fixture().await;
        let seasons = f.navigator.get_seasons(f.series.id).await.unwrap();
        let numbers: Vec<_> = seasons.iter().map(|s| s.number).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[tokio::test]
    async fn series_without_seasons_is_not_a_failure() {
        let f = fixture().await;
        let empty = f.store.seed_series("Pilot only", 5.0, false).await;
        assert!(f.navigator.get_seasons(empty.id).await.unwrap().is_empty());

        assert!(matches!(
            f.navigator.get_seasons(SeriesID::new()).await,
            Err(BrowseError::SeriesNotFound(_))
        ));
    }

    #[tokio::test]
    async fn episodes_are_ordered_by_number() {
        let f = fixture().await;
        let episodes = f
            .navigator
            .list_episodes(f.series.id, f.season_one.id)
            .await
            .unwrap();
        assert_eq!(episodes, f.episodes);
    }

    #[tokio::test]
    async fn season_under_wrong_series_does_not_match() {
        let f = fixture().await;
        let other = f.store.seed_series("Y", 6.0, false).await;

        let err = f
            .navigator
            .list_episodes(other.id, f.season_two.id)
            .await
            .unwrap_err();
        assert!(matches!(err, BrowseError::SeasonMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "There is no season that matches the criteria."
        );
    }

    #[tokio::test]
    async fn episode_missing_from_existing_season() {
        let f = fixture().await;
        let err = f
            .navigator
            .get_episode(f.series.id, f.season_two.id, f.episodes[0].id)
            .await
            .unwrap_err();
        assert!(matches!(err, BrowseError::EpisodeNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "There is no episode that matches the criteria."
        );
    }

    #[tokio::test]
    async fn foreign_season_fails_before_episode_lookup() {
        let f = fixture().await;
        let other = f.store.seed_series("Y", 6.0, false).await;

        // Season and episode both exist, just not under `other`.
        let err = f
            .navigator
            .get_episode(other.id, f.season_one.id, f.episodes[0].id)
            .await
            .unwrap_err();
        assert!(matches!(err, BrowseError::SeasonNotFound { .. }));
        assert_eq!(err.to_string(), "There is no season with that id.");
    }

    #[tokio::test]
    async fn resolves_episode_through_its_season() {
        let f = fixture().await;
        let episode = f
            .navigator
            .get_episode(f.series.id, f.season_one.id, f.episodes[1].id)
            .await
            .unwrap();
        assert_eq!(episode.number, 2);
        assert_eq!(episode.title, "Second");
    }
}
