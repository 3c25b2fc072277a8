use thiserror::Error;

use crate::error::CatalogError;
use crate::types::ids::{EpisodeID, SeasonID, SeriesID, UserID};

/// Failure of a read-side catalog operation.
///
/// Every variant except [`BrowseError::Storage`] is an expected "nothing to
/// show" outcome, and its display text is the message returned to clients.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("There are no series yet.")]
    NoSeries,

    #[error("There are no featured series.")]
    NoFeaturedSeries,

    // Wording kept for client compatibility.
    #[error("There are no featured movies.")]
    NoFavoriteSeries,

    #[error("There is no serial with that id.")]
    SeriesNotFound(SeriesID),

    /// `list_episodes` could not match the season to the series.
    #[error("There is no season that matches the criteria.")]
    SeasonMismatch {
        series_id: SeriesID,
        season_id: SeasonID,
    },

    /// `get_episode` could not resolve the season under the series.
    #[error("There is no season with that id.")]
    SeasonNotFound {
        series_id: SeriesID,
        season_id: SeasonID,
    },

    #[error("There is no episode that matches the criteria.")]
    EpisodeNotFound {
        season_id: SeasonID,
        episode_id: EpisodeID,
    },

    #[error(transparent)]
    Storage(#[from] CatalogError),
}

impl BrowseError {
    pub fn is_not_found(&self) -> bool {
        !matches!(self, BrowseError::Storage(_))
    }
}

/// Failure of a favorites mutation.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("series {0} does not exist")]
    SeriesNotFound(SeriesID),

    #[error("user {0} does not exist")]
    UserNotFound(UserID),

    #[error("series {series_id} is not in the favorites of user {user_id}")]
    NotInFavorites { series_id: SeriesID, user_id: UserID },

    #[error(transparent)]
    Storage(#[from] CatalogError),
}

/// Successful result of a favorites mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    AlreadyAdded,
    Removed,
}

impl FavoriteOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            FavoriteOutcome::Added => "Serial added to the favorite successfully",
            FavoriteOutcome::AlreadyAdded => "Serial already added to your favorite",
            FavoriteOutcome::Removed => "Serial deleted from favorite",
        }
    }
}
