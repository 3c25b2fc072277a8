use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    handlers::{
        catalog::{handle_favorites, handle_hierarchy, handle_series},
        users::auth::middleware::auth_middleware,
    },
    infra::app_state::AppState,
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(create_series_routes())
        .merge(create_protected_routes(state))
}

/// Public catalog browsing. Static segments win over `{series}`.
fn create_series_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/series/featured",
            get(handle_series::featured_series_handler),
        )
        .route("/series/{series}", get(handle_series::get_series_handler))
        .route(
            "/series/{series}/seasons",
            get(handle_hierarchy::get_seasons_handler),
        )
        .route(
            "/series/{series}/seasons/{season_id}/episodes",
            get(handle_hierarchy::list_episodes_handler),
        )
        .route(
            "/series/{series}/seasons/{season_id}/episodes/{episode_id}",
            get(handle_hierarchy::get_episode_handler),
        )
}

/// Create protected routes that require authentication
fn create_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/series/favorites",
            get(handle_series::favorite_series_handler),
        )
        .route(
            "/series/favorites/{id}",
            post(handle_favorites::add_favorite_handler)
                .delete(handle_favorites::remove_favorite_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
