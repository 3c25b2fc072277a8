pub mod v1;

use axum::{
    Json, Router,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use cinemate_core::api::{
    routes::{HEALTH, v1::ROOT},
    types::HealthResponse,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::infra::{app_state::AppState, config::Config};

/// Create the main API router with all versions
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new().nest(ROOT, v1::create_v1_router(state))
}

/// The complete application: health probe, versioned API and the
/// CORS and tracing layers.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(state.config());

    Router::new()
        .route(HEALTH, get(health_handler))
        .merge(create_api_router(state.clone()))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Permissive in dev, allow-list otherwise. Entries were validated when
/// the configuration was loaded.
fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.dev_mode {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    // An empty list admits no cross-origin caller.
    let allow_origin = AllowOrigin::list(origins);

    let methods: Vec<Method> = config
        .cors
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
        .collect();

    let headers: Vec<HeaderName> = config
        .cors
        .allowed_headers
        .iter()
        .filter_map(|h| HeaderName::from_bytes(h.as_bytes()).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}
