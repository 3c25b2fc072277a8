//! TV-series catalog: series → seasons → episodes plus the per-user
//! favorites relation.

pub mod errors;
pub mod favorites;
pub mod listing;
pub mod model;
pub mod navigator;
pub mod pagination;

pub use errors::{BrowseError, FavoriteOutcome, FavoritesError};
pub use favorites::FavoritesToggle;
pub use listing::ListingService;
pub use model::{Episode, Season, Series, SeriesDetails, SeriesSummary};
pub use navigator::HierarchyNavigator;
pub use pagination::{PageWindow, SERIES_PAGE_SIZE};
