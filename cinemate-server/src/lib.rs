//! HTTP surface of the Cinemate catalog: axum handlers, bearer-session
//! middleware, routing and configuration.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
