use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::errors::BrowseError;
use super::model::SeriesSummary;
use super::pagination::{PageWindow, SERIES_PAGE_SIZE};
use crate::application::unit_of_work::CatalogUnitOfWork;
use crate::database::ports::{
    catalog::CatalogRepository, favorites::FavoritesRepository,
};
use crate::domain::users::auth::AuthenticatedUser;

/// Paginated and filtered read access over series.
#[derive(Clone)]
pub struct ListingService {
    catalog: Arc<dyn CatalogRepository>,
    favorites: Arc<dyn FavoritesRepository>,
    page_size: u32,
}

impl fmt::Debug for ListingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingService")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl ListingService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        favorites: Arc<dyn FavoritesRepository>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            page_size: SERIES_PAGE_SIZE,
        }
    }

    pub fn from_unit_of_work(unit_of_work: &CatalogUnitOfWork) -> Self {
        Self::new(
            Arc::clone(&unit_of_work.catalog),
            Arc::clone(&unit_of_work.favorites),
        )
    }

    /// One page of series by title. Pages are 1-based; a page below 1 or
    /// past the end is [`BrowseError::NoSeries`].
    pub async fn list_series(
        &self,
        page_number: i64,
    ) -> Result<Vec<SeriesSummary>, BrowseError> {
        let Some(window) = PageWindow::for_page(page_number, self.page_size)
        else {
            debug!(page_number, "series page out of range");
            return Err(BrowseError::NoSeries);
        };

        let page = self.catalog.list_series_page(window).await?;
        if page.is_empty() {
            return Err(BrowseError::NoSeries);
        }

        Ok(page)
    }

    pub async fn featured_series(
        &self,
    ) -> Result<Vec<SeriesSummary>, BrowseError> {
        let featured = self.catalog.list_featured_series().await?;
        if featured.is_empty() {
            return Err(BrowseError::NoFeaturedSeries);
        }

        Ok(featured)
    }

    pub async fn favorite_series(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<SeriesSummary>, BrowseError> {
        let favorites =
            self.favorites.list_favorite_series(caller.user_id).await?;
        if favorites.is_empty() {
            return Err(BrowseError::NoFavoriteSeries);
        }

        Ok(favorites)
    }
}
