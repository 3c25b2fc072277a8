use anyhow::Result;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use cinemate_core::{
    api::{routes::v1, types::ErrorResponse},
    database::infrastructure::memory::InMemoryCatalog,
};

#[path = "support/mod.rs"]
mod support;

use support::{bearer, build_test_app};

#[tokio::test]
async fn unknown_tokens_are_rejected() -> Result<()> {
    let app = build_test_app(InMemoryCatalog::new())?;

    let response = app
        .server
        .get(v1::series::FAVORITES)
        .add_header("Authorization", bearer("definitely-not-issued"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "Invalid or expired session");
    assert_eq!(body.status, 401);

    app.server
        .get(v1::series::FAVORITES)
        .add_header("Authorization", "Basic YWxpY2U6c2VjcmV0")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn revoked_and_expired_sessions_lose_access() -> Result<()> {
    let store = InMemoryCatalog::new();
    let dark = store.seed_series("Dark", 8.7, false).await;
    let app = build_test_app(store)?;
    let user = app.store.seed_user("alice").await;
    app.store.seed_favorite(dark.id, user.id).await;

    let auth = app.state.auth_service();
    let revoked = auth.issue_session(user.id, Duration::hours(1)).await?;
    let expired = auth.issue_session(user.id, Duration::hours(1)).await?;
    let live = auth.issue_session(user.id, Duration::hours(1)).await?;

    app.server
        .get(v1::series::FAVORITES)
        .add_header("Authorization", bearer(&revoked.token))
        .await
        .assert_status_ok();

    app.store.revoke_session(revoked.session_id).await;
    app.store
        .expire_session(expired.session_id, Utc::now() - Duration::seconds(1))
        .await;

    for token in [&revoked.token, &expired.token] {
        app.server
            .get(v1::series::FAVORITES)
            .add_header("Authorization", bearer(token))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    app.server
        .get(v1::series::FAVORITES)
        .add_header("Authorization", bearer(&live.token))
        .await
        .assert_status_ok();
    Ok(())
}

#[tokio::test]
async fn browsing_stays_public() -> Result<()> {
    let store = InMemoryCatalog::new();
    store.seed_series("Andor", 8.4, true).await;
    let app = build_test_app(store)?;

    app.server
        .get(v1::series::FEATURED)
        .add_header("Authorization", bearer("stale-token"))
        .await
        .assert_status_ok();
    Ok(())
}
