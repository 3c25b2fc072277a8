use async_trait::async_trait;
use sqlx::PgPool;

use super::SERIES_CATEGORIES;
use super::catalog::summary_from_row;
use crate::database::ports::favorites::FavoritesRepository;
use crate::domain::catalog::SeriesSummary;
use crate::error::{CatalogError, Result};
use crate::types::ids::{SeriesID, UserID};

/// PostgreSQL-backed implementation of the `FavoritesRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresFavoritesRepository {
    pool: PgPool,
}

impl PostgresFavoritesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl FavoritesRepository for PostgresFavoritesRepository {
    async fn list_favorite_series(
        &self,
        user_id: UserID,
    ) -> Result<Vec<SeriesSummary>> {
        let sql = format!(
            r#"
            SELECT s.id, s.title, s.rating, s.is_featured, {SERIES_CATEGORIES}
            FROM series s
            JOIN series_favorites f ON f.series_id = s.id
            WHERE f.user_id = $1
            ORDER BY s.rating DESC, s.title, s.id
            "#
        );
        let rows = sqlx::query(&sql)
            .bind(user_id.as_uuid())
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Failed to list favorite series: {}",
                    e
                ))
            })?;

        rows.iter().map(summary_from_row).collect()
    }

    async fn is_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM series_favorites
                WHERE series_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(series_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!(
                "Failed to check favorite: {}",
                e
            ))
        })
    }

    async fn add_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO series_favorites (series_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (series_id, user_id) DO NOTHING
            "#,
        )
        .bind(series_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(self.pool())
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error()
                && db_err.is_foreign_key_violation()
            {
                return CatalogError::NotFound(format!(
                    "series {} or user {}",
                    series_id, user_id
                ));
            }
            CatalogError::Internal(format!("Failed to add favorite: {}", e))
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM series_favorites WHERE series_id = $1 AND user_id = $2",
        )
        .bind(series_id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!(
                "Failed to remove favorite: {}",
                e
            ))
        })?;

        Ok(result.rows_affected() == 1)
    }
}
