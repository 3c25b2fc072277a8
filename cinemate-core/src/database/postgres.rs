use std::fmt;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use crate::MIGRATOR;
use crate::error::{CatalogError, Result};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
    max_connections: u32,
}

impl fmt::Debug for PostgresDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresDatabase")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl PostgresDatabase {
    pub async fn new(
        connection_string: &str,
        max_connections: u32,
    ) -> Result<Self> {
        let connect_options: PgConnectOptions =
            connection_string.trim().parse().map_err(|e| {
                CatalogError::Internal(format!(
                    "Invalid PostgreSQL connection string: {}",
                    e
                ))
            })?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                CatalogError::Internal(format!(
                    "Database connection failed: {}",
                    e
                ))
            })?;

        info!(max_connections, "database pool initialized");

        Ok(Self {
            pool,
            max_connections,
        })
    }

    /// Wrap an existing pool (mainly for `sqlx::test`).
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply all pending embedded migrations.
    pub async fn initialize_schema(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await.map_err(|e| {
            CatalogError::Internal(format!("Migration failed: {}", e))
        })?;

        info!("database schema is up to date");
        Ok(())
    }
}
