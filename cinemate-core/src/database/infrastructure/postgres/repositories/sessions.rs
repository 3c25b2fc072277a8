use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::catalog::decode_err;
use crate::database::ports::sessions::AuthSessionRepository;
use crate::domain::users::auth::AuthSessionRecord;
use crate::error::{CatalogError, Result};
use crate::types::ids::UserID;

/// PostgreSQL-backed implementation of the `AuthSessionRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresAuthSessionRepository {
    pool: PgPool,
}

impl PostgresAuthSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AuthSessionRepository for PostgresAuthSessionRepository {
    async fn insert_session(
        &self,
        user_id: UserID,
        token_hash: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid> {
        let session_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                id, user_id, session_token_hash,
                created_at, expires_at, last_activity
            )
            VALUES ($1, $2, $3, $4, $5, $4)
            "#,
        )
        .bind(session_id)
        .bind(user_id.as_uuid())
        .bind(token_hash)
        .bind(created_at)
        .bind(expires_at)
        .execute(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to insert session: {}", e))
        })?;

        Ok(session_id)
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AuthSessionRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, created_at, expires_at, last_activity, revoked
            FROM auth_sessions
            WHERE session_token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to load session: {}", e))
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(AuthSessionRecord {
            id: row.try_get("id").map_err(decode_err)?,
            user_id: UserID::from_uuid(
                row.try_get("user_id").map_err(decode_err)?,
            ),
            created_at: row.try_get("created_at").map_err(decode_err)?,
            expires_at: row.try_get("expires_at").map_err(decode_err)?,
            last_activity: row.try_get("last_activity").map_err(decode_err)?,
            revoked: row.try_get("revoked").map_err(decode_err)?,
        }))
    }

    async fn touch(&self, session_id: Uuid) -> Result<()> {
        sqlx::query(
            "UPDATE auth_sessions SET last_activity = NOW() WHERE id = $1",
        )
        .bind(session_id)
        .execute(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to touch session: {}", e))
        })?;

        Ok(())
    }
}
