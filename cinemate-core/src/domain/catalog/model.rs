use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::ids::{EpisodeID, SeasonID, SeriesID};

/// A series as held by the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesID,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub is_featured: bool,
    pub release_year: Option<i32>,
    pub categories: Vec<String>,
}

/// List item returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub id: SeriesID,
    pub title: String,
    pub rating: f64,
    pub is_featured: bool,
    pub categories: Vec<String>,
}

/// Full detail returned by `get_series`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetails {
    pub id: SeriesID,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub is_featured: bool,
    pub release_year: Option<i32>,
    pub categories: Vec<String>,
    pub season_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonID,
    pub series_id: SeriesID,
    pub number: i32,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeID,
    pub season_id: SeasonID,
    pub number: i32,
    pub title: String,
    pub runtime_minutes: Option<i32>,
}

impl Series {
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            id: self.id,
            title: self.title.clone(),
            rating: self.rating,
            is_featured: self.is_featured,
            categories: sorted_categories(&self.categories),
        }
    }

    pub fn details(&self, season_count: i64) -> SeriesDetails {
        SeriesDetails {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            rating: self.rating,
            is_featured: self.is_featured,
            release_year: self.release_year,
            categories: sorted_categories(&self.categories),
            season_count,
        }
    }
}

/// Title ascending, identifier as tie-breaker so pages never overlap.
pub fn by_title(a: &SeriesSummary, b: &SeriesSummary) -> Ordering {
    a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id))
}

/// Rating descending, then title ascending.
pub fn by_rating_desc(a: &SeriesSummary, b: &SeriesSummary) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| by_title(a, b))
}

fn sorted_categories(categories: &[String]) -> Vec<String> {
    let mut sorted = categories.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted
}
