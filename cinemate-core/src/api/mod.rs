//! API-facing facade (route templates and transport DTOs).

pub mod routes;
pub mod types;
