use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::infrastructure::memory::InMemoryCatalog;
use crate::database::ports::{
    catalog::CatalogRepository, favorites::FavoritesRepository,
    sessions::AuthSessionRepository, users::UsersRepository,
};
#[cfg(feature = "database")]
use crate::database::{
    infrastructure::postgres::{
        PostgresAuthSessionRepository, PostgresCatalogRepository,
        PostgresFavoritesRepository, PostgresUsersRepository,
    },
    postgres::PostgresDatabase,
};

/// Aggregates all repository ports used by application services.
#[derive(Clone)]
pub struct CatalogUnitOfWork {
    pub catalog: Arc<dyn CatalogRepository>,
    pub favorites: Arc<dyn FavoritesRepository>,
    pub users: Arc<dyn UsersRepository>,
    pub sessions: Arc<dyn AuthSessionRepository>,
}

impl fmt::Debug for CatalogUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogUnitOfWork")
            .field("catalog", &type_name_of_val(self.catalog.as_ref()))
            .field("favorites", &type_name_of_val(self.favorites.as_ref()))
            .field("users", &type_name_of_val(self.users.as_ref()))
            .field("sessions", &type_name_of_val(self.sessions.as_ref()))
            .finish()
    }
}

impl CatalogUnitOfWork {
    #[cfg(feature = "database")]
    pub fn from_postgres(postgres: &PostgresDatabase) -> Self {
        let pool = postgres.pool().clone();
        Self {
            catalog: Arc::new(PostgresCatalogRepository::new(pool.clone())),
            favorites: Arc::new(PostgresFavoritesRepository::new(pool.clone())),
            users: Arc::new(PostgresUsersRepository::new(pool.clone())),
            sessions: Arc::new(PostgresAuthSessionRepository::new(pool)),
        }
    }

    /// Every port served by one shared in-memory store.
    pub fn in_memory(store: &InMemoryCatalog) -> Self {
        Self {
            catalog: Arc::new(store.clone()),
            favorites: Arc::new(store.clone()),
            users: Arc::new(store.clone()),
            sessions: Arc::new(store.clone()),
        }
    }
}
