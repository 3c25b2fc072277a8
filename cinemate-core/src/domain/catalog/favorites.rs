use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::errors::{FavoriteOutcome, FavoritesError};
use crate::application::unit_of_work::CatalogUnitOfWork;
use crate::database::ports::{
    catalog::CatalogRepository, favorites::FavoritesRepository,
    users::UsersRepository,
};
use crate::domain::users::auth::AuthenticatedUser;
use crate::types::ids::SeriesID;

/// Add/remove a series in the caller's favorite set.
///
/// `add` is idempotent and reports a repeat as [`FavoriteOutcome::AlreadyAdded`];
/// `remove` of an absent pair fails with [`FavoritesError::NotInFavorites`].
#[derive(Clone)]
pub struct FavoritesToggle {
    catalog: Arc<dyn CatalogRepository>,
    favorites: Arc<dyn FavoritesRepository>,
    users: Arc<dyn UsersRepository>,
}

impl fmt::Debug for FavoritesToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesToggle").finish_non_exhaustive()
    }
}

impl FavoritesToggle {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        favorites: Arc<dyn FavoritesRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            users,
        }
    }

    pub fn from_unit_of_work(unit_of_work: &CatalogUnitOfWork) -> Self {
        Self::new(
            Arc::clone(&unit_of_work.catalog),
            Arc::clone(&unit_of_work.favorites),
            Arc::clone(&unit_of_work.users),
        )
    }

    pub async fn add(
        &self,
        caller: &AuthenticatedUser,
        series_id: SeriesID,
    ) -> Result<FavoriteOutcome, FavoritesError> {
        let user_id = caller.user_id;
        self.users
            .get_user_by_id(user_id)
            .await?
            .ok_or(FavoritesError::UserNotFound(user_id))?;

        if !self.catalog.series_exists(series_id).await? {
            return Err(FavoritesError::SeriesNotFound(series_id));
        }

        if self.favorites.is_favorite(series_id, user_id).await? {
            return Ok(FavoriteOutcome::AlreadyAdded);
        }

        // A concurrent add may win between the check and the insert.
        let inserted = self.favorites.add_favorite(series_id, user_id).await?;
        if !inserted {
            return Ok(FavoriteOutcome::AlreadyAdded);
        }

        info!(%series_id, %user_id, "series added to favorites");
        Ok(FavoriteOutcome::Added)
    }

    pub async fn remove(
        &self,
        caller: &AuthenticatedUser,
        series_id: SeriesID,
    ) -> Result<FavoriteOutcome, FavoritesError> {
        let user_id = caller.user_id;
        self.users
            .get_user_by_id(user_id)
            .await?
            .ok_or(FavoritesError::UserNotFound(user_id))?;

        let removed =
            self.favorites.remove_favorite(series_id, user_id).await?;
        if !removed {
            return Err(FavoritesError::NotInFavorites { series_id, user_id });
        }

        info!(%series_id, %user_id, "series removed from favorites");
        Ok(FavoriteOutcome::Removed)
    }
}
