//! PostgreSQL infrastructure adapters implementing the database ports.

pub mod repositories;

pub use repositories::catalog::PostgresCatalogRepository;
pub use repositories::favorites::PostgresFavoritesRepository;
pub use repositories::sessions::PostgresAuthSessionRepository;
pub use repositories::users::PostgresUsersRepository;
