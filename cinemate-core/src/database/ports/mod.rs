//! Repository ports (interfaces) grouped by bounded context.
//! Services depend on these traits only; Postgres and in-memory adapters
//! live under `database::infrastructure`.

pub mod catalog;
pub mod favorites;
pub mod sessions;
pub mod users;
