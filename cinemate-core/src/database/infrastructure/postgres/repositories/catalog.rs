use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::SERIES_CATEGORIES;
use crate::database::ports::catalog::CatalogRepository;
use crate::domain::catalog::{
    Episode, PageWindow, Season, SeriesDetails, SeriesSummary,
};
use crate::error::{CatalogError, Result};
use crate::types::ids::{EpisodeID, SeasonID, SeriesID};

/// PostgreSQL-backed implementation of the `CatalogRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub(crate) fn summary_from_row(row: &PgRow) -> Result<SeriesSummary> {
    Ok(SeriesSummary {
        id: SeriesID::from_uuid(row.try_get("id").map_err(decode_err)?),
        title: row.try_get("title").map_err(decode_err)?,
        rating: row.try_get("rating").map_err(decode_err)?,
        is_featured: row.try_get("is_featured").map_err(decode_err)?,
        categories: row.try_get("categories").map_err(decode_err)?,
    })
}

fn season_from_row(row: &PgRow) -> Result<Season> {
    Ok(Season {
        id: SeasonID::from_uuid(row.try_get("id").map_err(decode_err)?),
        series_id: SeriesID::from_uuid(
            row.try_get("series_id").map_err(decode_err)?,
        ),
        number: row.try_get("number").map_err(decode_err)?,
        title: row.try_get("title").map_err(decode_err)?,
    })
}

fn episode_from_row(row: &PgRow) -> Result<Episode> {
    Ok(Episode {
        id: EpisodeID::from_uuid(row.try_get("id").map_err(decode_err)?),
        season_id: SeasonID::from_uuid(
            row.try_get("season_id").map_err(decode_err)?,
        ),
        number: row.try_get("number").map_err(decode_err)?,
        title: row.try_get("title").map_err(decode_err)?,
        runtime_minutes: row.try_get("runtime_minutes").map_err(decode_err)?,
    })
}

pub(crate) fn decode_err(e: sqlx::Error) -> CatalogError {
    CatalogError::Internal(format!("Failed to decode row: {}", e))
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_series_page(
        &self,
        window: PageWindow,
    ) -> Result<Vec<SeriesSummary>> {
        // An offset past i64 is past any table Postgres can hold.
        let Ok(offset) = i64::try_from(window.offset) else {
            return Ok(Vec::new());
        };

        let sql = format!(
            r#"
            SELECT s.id, s.title, s.rating, s.is_featured, {SERIES_CATEGORIES}
            FROM series s
            ORDER BY s.title, s.id
            LIMIT $1 OFFSET $2
            "#
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(window.limit))
            .bind(offset)
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Failed to list series page: {}",
                    e
                ))
            })?;

        rows.iter().map(summary_from_row).collect()
    }

    async fn list_featured_series(&self) -> Result<Vec<SeriesSummary>> {
        let sql = format!(
            r#"
            SELECT s.id, s.title, s.rating, s.is_featured, {SERIES_CATEGORIES}
            FROM series s
            WHERE s.is_featured
            ORDER BY s.rating DESC, s.title, s.id
            "#
        );
        let rows =
            sqlx::query(&sql)
                .fetch_all(self.pool())
                .await
                .map_err(|e| {
                    CatalogError::Internal(format!(
                        "Failed to list featured series: {}",
                        e
                    ))
                })?;

        rows.iter().map(summary_from_row).collect()
    }

    async fn get_series(
        &self,
        series_id: SeriesID,
    ) -> Result<Option<SeriesDetails>> {
        let sql = format!(
            r#"
            SELECT s.id, s.title, s.description, s.rating, s.is_featured,
                   s.release_year, {SERIES_CATEGORIES},
                   (SELECT COUNT(*) FROM seasons se WHERE se.series_id = s.id)
                       AS season_count
            FROM series s
            WHERE s.id = $1
            "#
        );
        let row = sqlx::query(&sql)
            .bind(series_id.as_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!("Failed to get series: {}", e))
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(SeriesDetails {
            id: SeriesID::from_uuid(row.try_get("id").map_err(decode_err)?),
            title: row.try_get("title").map_err(decode_err)?,
            description: row.try_get("description").map_err(decode_err)?,
            rating: row.try_get("rating").map_err(decode_err)?,
            is_featured: row.try_get("is_featured").map_err(decode_err)?,
            release_year: row.try_get("release_year").map_err(decode_err)?,
            categories: row.try_get("categories").map_err(decode_err)?,
            season_count: row.try_get("season_count").map_err(decode_err)?,
        }))
    }

    async fn series_exists(&self, series_id: SeriesID) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM series WHERE id = $1)",
        )
        .bind(series_id.as_uuid())
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!(
                "Failed to check series existence: {}",
                e
            ))
        })
    }

    async fn list_seasons(&self, series_id: SeriesID) -> Result<Vec<Season>> {
        let rows = sqlx::query(
            r#"
            SELECT id, series_id, number, title
            FROM seasons
            WHERE series_id = $1
            ORDER BY number, id
            "#,
        )
        .bind(series_id.as_uuid())
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to list seasons: {}", e))
        })?;

        rows.iter().map(season_from_row).collect()
    }

    async fn find_season(
        &self,
        series_id: SeriesID,
        season_id: SeasonID,
    ) -> Result<Option<Season>> {
        let row = sqlx::query(
            r#"
            SELECT id, series_id, number, title
            FROM seasons
            WHERE id = $1 AND series_id = $2
            "#,
        )
        .bind(season_id.as_uuid())
        .bind(series_id.as_uuid())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to find season: {}", e))
        })?;

        row.as_ref().map(season_from_row).transpose()
    }

    async fn list_episodes(&self, season_id: SeasonID) -> Result<Vec<Episode>> {
        let rows = sqlx::query(
            r#"
            SELECT id, season_id, number, title, runtime_minutes
            FROM episodes
            WHERE season_id = $1
            ORDER BY number, id
            "#,
        )
        .bind(season_id.as_uuid())
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to list episodes: {}", e))
        })?;

        rows.iter().map(episode_from_row).collect()
    }

    async fn find_episode(
        &self,
        season_id: SeasonID,
        episode_id: EpisodeID,
    ) -> Result<Option<Episode>> {
        let row = sqlx::query(
            r#"
            SELECT id, season_id, number, title, runtime_minutes
            FROM episodes
            WHERE id = $1 AND season_id = $2
            "#,
        )
        .bind(episode_id.as_uuid())
        .bind(season_id.as_uuid())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to find episode: {}", e))
        })?;

        row.as_ref().map(episode_from_row).transpose()
    }
}
