use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;

use super::catalog::decode_err;
use crate::database::ports::users::UsersRepository;
use crate::domain::users::User;
use crate::error::{CatalogError, Result};
use crate::types::ids::UserID;

/// PostgreSQL-backed implementation of the `UsersRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresUsersRepository {
    pool: PgPool,
}

impl PostgresUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn user_from_row(row: &PgRow) -> Result<User> {
    Ok(User {
        id: UserID::from_uuid(row.try_get("id").map_err(decode_err)?),
        username: row.try_get("username").map_err(decode_err)?,
        created_at: row.try_get("created_at").map_err(decode_err)?,
    })
}

#[async_trait]
impl UsersRepository for PostgresUsersRepository {
    async fn get_user_by_id(&self, user_id: UserID) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            CatalogError::Internal(format!("Failed to get user by id: {}", e))
        })?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn create_user(&self, username: &str) -> Result<User> {
        let user = User {
            id: UserID::new(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO users (id, username, created_at) VALUES ($1, $2, $3)",
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(user.created_at)
        .execute(self.pool())
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error()
                && db_err.constraint() == Some("users_username_key")
            {
                return CatalogError::InvalidInput(format!(
                    "username {:?} is taken",
                    username
                ));
            }
            CatalogError::Internal(format!("Failed to create user: {}", e))
        })?;

        info!("Created user: {} ({})", user.username, user.id);
        Ok(user)
    }
}
