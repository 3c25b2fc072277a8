//! Repository ports and the adapters implementing them.

pub mod infrastructure;
pub mod ports;

#[cfg(feature = "database")]
pub mod context;
#[cfg(feature = "database")]
pub mod postgres;

#[cfg(feature = "database")]
pub use context::DatabaseContext;
#[cfg(feature = "database")]
pub use postgres::PostgresDatabase;
