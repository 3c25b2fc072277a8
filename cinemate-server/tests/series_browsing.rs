use anyhow::Result;
use axum::http::StatusCode;
use cinemate_core::{
    api::{
        routes::{HEALTH, utils as route_utils, v1},
        types::{ErrorResponse, HealthResponse},
    },
    database::infrastructure::memory::InMemoryCatalog,
    domain::catalog::{Episode, Season, SeriesDetails, SeriesSummary},
    types::ids::{EpisodeID, SeasonID, SeriesID},
};

#[path = "support/mod.rs"]
mod support;

use support::build_test_app;

fn page_path(page: i64) -> String {
    route_utils::replace_param(v1::series::ITEM, "{series}", page.to_string())
}

fn titles(items: &[SeriesSummary]) -> Vec<&str> {
    items.iter().map(|s| s.title.as_str()).collect()
}

async fn seeded_catalog() -> InMemoryCatalog {
    let store = InMemoryCatalog::new();
    store.seed_series("Dark", 8.7, false).await;
    store.seed_series("Andor", 8.4, true).await;
    store.seed_series("Chernobyl", 9.3, true).await;
    store.seed_series("Babylon Berlin", 8.3, false).await;
    store.seed_series("Severance", 8.7, true).await;
    store
}

#[tokio::test]
async fn health_probe_reports_ok() -> Result<()> {
    let app = build_test_app(InMemoryCatalog::new())?;

    let response = app.server.get(HEALTH).await;
    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    Ok(())
}

#[tokio::test]
async fn pages_walk_the_catalog_in_title_order() -> Result<()> {
    let app = build_test_app(seeded_catalog().await)?;

    let first = app.server.get(&page_path(1)).await;
    first.assert_status_ok();
    let first: Vec<SeriesSummary> = first.json();
    assert_eq!(titles(&first), ["Andor", "Babylon Berlin"]);

    let third: Vec<SeriesSummary> = app.server.get(&page_path(3)).await.json();
    assert_eq!(titles(&third), ["Severance"]);

    let past_end = app.server.get(&page_path(4)).await;
    past_end.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = past_end.json();
    assert_eq!(body.msg, "There are no series yet.");
    assert_eq!(body.status, 404);

    app.server
        .get(&page_path(0))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn oversized_page_numbers_report_no_series() -> Result<()> {
    let app = build_test_app(seeded_catalog().await)?;

    for raw in ["99999999999999999999", "-99999999999999999999"] {
        let path = route_utils::replace_param(v1::series::ITEM, "{series}", raw);
        let response = app.server.get(&path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.msg, "There are no series yet.");
    }
    Ok(())
}

#[tokio::test]
async fn featured_lists_only_featured_by_rating() -> Result<()> {
    let app = build_test_app(seeded_catalog().await)?;

    let response = app.server.get(v1::series::FEATURED).await;
    response.assert_status_ok();
    let featured: Vec<SeriesSummary> = response.json();
    assert_eq!(titles(&featured), ["Chernobyl", "Severance", "Andor"]);
    Ok(())
}

#[tokio::test]
async fn featured_on_plain_catalog_is_not_found() -> Result<()> {
    let store = InMemoryCatalog::new();
    store.seed_series("Dark", 8.7, false).await;
    let app = build_test_app(store)?;

    let response = app.server.get(v1::series::FEATURED).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "There are no featured series.");
    Ok(())
}

#[tokio::test]
async fn series_key_resolves_ids_and_rejects_garbage() -> Result<()> {
    let store = InMemoryCatalog::new();
    let dark = store.seed_series("Dark", 8.7, false).await;
    store.seed_season(dark.id, 1).await;
    store.seed_season(dark.id, 2).await;
    let app = build_test_app(store)?;

    let path = route_utils::replace_param(v1::series::ITEM, "{series}", dark.id.to_string());
    let response = app.server.get(&path).await;
    response.assert_status_ok();
    let details: SeriesDetails = response.json();
    assert_eq!(details.id, dark.id);
    assert_eq!(details.description, "Dark description");
    assert_eq!(details.season_count, 2);

    let missing = route_utils::replace_param(
        v1::series::ITEM,
        "{series}",
        SeriesID::new().to_string(),
    );
    let response = app.server.get(&missing).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "There is no serial with that id.");

    let garbage = route_utils::replace_param(v1::series::ITEM, "{series}", "not-a-key");
    let response = app.server.get(&garbage).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "Invalid series key");
    Ok(())
}

#[tokio::test]
async fn seasons_are_listed_by_number() -> Result<()> {
    let store = InMemoryCatalog::new();
    let dark = store.seed_series("Dark", 8.7, false).await;
    let bare = store.seed_series("Pilot only", 5.0, false).await;
    store.seed_season(dark.id, 2).await;
    store.seed_season(dark.id, 1).await;
    let app = build_test_app(store)?;

    let path = route_utils::replace_param(v1::series::SEASONS, "{series}", dark.id.to_string());
    let seasons: Vec<Season> = app.server.get(&path).await.json();
    let numbers: Vec<_> = seasons.iter().map(|s| s.number).collect();
    assert_eq!(numbers, [1, 2]);

    let path = route_utils::replace_param(v1::series::SEASONS, "{series}", bare.id.to_string());
    let response = app.server.get(&path).await;
    response.assert_status_ok();
    let seasons: Vec<Season> = response.json();
    assert!(seasons.is_empty());

    let path = route_utils::replace_param(
        v1::series::SEASONS,
        "{series}",
        SeriesID::new().to_string(),
    );
    app.server
        .get(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn episodes_resolve_only_through_their_owners() -> Result<()> {
    let store = InMemoryCatalog::new();
    let dark = store.seed_series("Dark", 8.7, false).await;
    let andor = store.seed_series("Andor", 8.4, true).await;
    let season = store.seed_season(dark.id, 1).await;
    let empty_season = store.seed_season(dark.id, 2).await;
    let lies = store.seed_episode(season.id, 2, "Lies").await;
    let secrets = store.seed_episode(season.id, 1, "Secrets").await;
    let app = build_test_app(store)?;

    let episodes_path = |series: SeriesID, season: SeasonID| {
        route_utils::replace_params(
            v1::series::EPISODES,
            &[
                ("{series}", series.to_string()),
                ("{season_id}", season.to_string()),
            ],
        )
    };
    let episode_path = |series: SeriesID, season: SeasonID, episode: EpisodeID| {
        route_utils::replace_params(
            v1::series::EPISODE,
            &[
                ("{series}", series.to_string()),
                ("{season_id}", season.to_string()),
                ("{episode_id}", episode.to_string()),
            ],
        )
    };

    let episodes: Vec<Episode> = app.server.get(&episodes_path(dark.id, season.id)).await.json();
    assert_eq!(episodes, [secrets.clone(), lies.clone()]);

    let response = app.server.get(&episodes_path(andor.id, season.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "There is no season that matches the criteria.");

    let response = app
        .server
        .get(&episode_path(dark.id, season.id, lies.id))
        .await;
    response.assert_status_ok();
    let episode: Episode = response.json();
    assert_eq!(episode.title, "Lies");

    let response = app
        .server
        .get(&episode_path(andor.id, season.id, lies.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "There is no season with that id.");

    let response = app
        .server
        .get(&episode_path(dark.id, empty_season.id, secrets.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "There is no episode that matches the criteria.");
    Ok(())
}

#[tokio::test]
async fn malformed_hierarchy_ids_are_bad_requests() -> Result<()> {
    let store = InMemoryCatalog::new();
    let dark = store.seed_series("Dark", 8.7, false).await;
    let app = build_test_app(store)?;

    let path = route_utils::replace_params(
        v1::series::EPISODES,
        &[("{series}", dark.id.to_string()), ("{season_id}", "nope".to_string())],
    );
    let response = app.server.get(&path).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.msg, "Invalid season id");
    Ok(())
}
