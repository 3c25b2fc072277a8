// Shared by several test binaries; not every helper is used by each.
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use chrono::Duration;
use cinemate_core::{
    application::unit_of_work::CatalogUnitOfWork,
    database::infrastructure::memory::InMemoryCatalog,
    domain::users::{User, auth::AuthCrypto},
};
use cinemate_server::{
    AppState,
    infra::config::{
        AuthConfig, Config, ConfigMetadata, CorsConfig, DEFAULT_SESSION_TTL,
        DatabaseConfig, ServerConfig,
    },
    routes::create_app,
};

pub const TEST_TOKEN_KEY: &str = "integration-test-token-key-0123456789";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub store: InMemoryCatalog,
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
            allowed_methods: vec!["GET".into(), "POST".into(), "DELETE".into()],
            allowed_headers: vec!["authorization".into(), "content-type".into()],
        },
        auth: AuthConfig {
            token_key: TEST_TOKEN_KEY.to_string(),
            session_ttl: DEFAULT_SESSION_TTL,
        },
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

pub fn build_test_app(store: InMemoryCatalog) -> Result<TestApp> {
    let unit_of_work = Arc::new(CatalogUnitOfWork::in_memory(&store));
    let crypto = Arc::new(AuthCrypto::new(TEST_TOKEN_KEY)?);
    let state = AppState::new(unit_of_work, Arc::new(test_config()), crypto);

    let server = TestServer::builder()
        .http_transport()
        .build(create_app(state.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;

    Ok(TestApp {
        server,
        state,
        store,
    })
}

/// Seed a user and open a one-hour session for them.
pub async fn signed_in_user(app: &TestApp, username: &str) -> Result<(User, String)> {
    let user = app.store.seed_user(username).await;
    let issued = app
        .state
        .auth_service()
        .issue_session(user.id, Duration::hours(1))
        .await?;
    Ok((user, issued.token))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
