//! In-process adapter implementing every repository port.
//!
//! Backs the unit and HTTP tests and local runs without PostgreSQL. All
//! ports share one state behind a `tokio::sync::RwLock`, so a clone of the
//! store observes the same data.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::ports::{
    catalog::CatalogRepository, favorites::FavoritesRepository,
    sessions::AuthSessionRepository, users::UsersRepository,
};
use crate::domain::catalog::model::{by_rating_desc, by_title};
use crate::domain::catalog::{
    Episode, PageWindow, Season, Series, SeriesDetails, SeriesSummary,
};
use crate::domain::users::User;
use crate::domain::users::auth::AuthSessionRecord;
use crate::error::{CatalogError, Result};
use crate::types::ids::{EpisodeID, SeasonID, SeriesID, UserID};

#[derive(Debug, Default)]
struct MemoryState {
    series: HashMap<SeriesID, Series>,
    seasons: HashMap<SeasonID, Season>,
    episodes: HashMap<EpisodeID, Episode>,
    users: HashMap<UserID, User>,
    favorites: HashSet<(SeriesID, UserID)>,
    sessions: HashMap<Uuid, (String, AuthSessionRecord)>,
}

impl MemoryState {
    fn summaries_where(
        &self,
        keep: impl Fn(&Series) -> bool,
    ) -> Vec<SeriesSummary> {
        self.series
            .values()
            .filter(|series| keep(series))
            .map(Series::summary)
            .collect()
    }

    fn season_count(&self, series_id: SeriesID) -> i64 {
        self.seasons
            .values()
            .filter(|season| season.series_id == series_id)
            .count() as i64
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_series(&self, series: Series) {
        self.state.write().await.series.insert(series.id, series);
    }

    pub async fn insert_season(&self, season: Season) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.series.contains_key(&season.series_id) {
            return Err(CatalogError::NotFound(format!(
                "series {} for season {}",
                season.series_id, season.id
            )));
        }
        state.seasons.insert(season.id, season);
        Ok(())
    }

    pub async fn insert_episode(&self, episode: Episode) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.seasons.contains_key(&episode.season_id) {
            return Err(CatalogError::NotFound(format!(
                "season {} for episode {}",
                episode.season_id, episode.id
            )));
        }
        state.episodes.insert(episode.id, episode);
        Ok(())
    }

    pub async fn seed_series(
        &self,
        title: &str,
        rating: f64,
        is_featured: bool,
    ) -> Series {
        let series = Series {
            id: SeriesID::new(),
            title: title.to_string(),
            description: format!("{title} description"),
            rating,
            is_featured,
            release_year: None,
            categories: Vec::new(),
        };
        self.insert_series(series.clone()).await;
        series
    }

    /// Panics if the series was never seeded.
    pub async fn seed_season(&self, series_id: SeriesID, number: i32) -> Season {
        let season = Season {
            id: SeasonID::new(),
            series_id,
            number,
            title: Some(format!("Season {number}")),
        };
        self.insert_season(season.clone())
            .await
            .expect("seed_season requires a seeded series");
        season
    }

    /// Panics if the season was never seeded.
    pub async fn seed_episode(
        &self,
        season_id: SeasonID,
        number: i32,
        title: &str,
    ) -> Episode {
        let episode = Episode {
            id: EpisodeID::new(),
            season_id,
            number,
            title: title.to_string(),
            runtime_minutes: None,
        };
        self.insert_episode(episode.clone())
            .await
            .expect("seed_episode requires a seeded season");
        episode
    }

    pub async fn seed_user(&self, username: &str) -> User {
        let user = User {
            id: UserID::new(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        self.state.write().await.users.insert(user.id, user.clone());
        user
    }

    pub async fn seed_favorite(&self, series_id: SeriesID, user_id: UserID) {
        self.state.write().await.favorites.insert((series_id, user_id));
    }

    pub async fn favorite_count(&self) -> usize {
        self.state.read().await.favorites.len()
    }

    pub async fn expire_session(
        &self,
        session_id: Uuid,
        expires_at: DateTime<Utc>,
    ) {
        if let Some((_, record)) =
            self.state.write().await.sessions.get_mut(&session_id)
        {
            record.expires_at = expires_at;
        }
    }

    pub async fn revoke_session(&self, session_id: Uuid) {
        if let Some((_, record)) =
            self.state.write().await.sessions.get_mut(&session_id)
        {
            record.revoked = true;
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_series_page(
        &self,
        window: PageWindow,
    ) -> Result<Vec<SeriesSummary>> {
        let state = self.state.read().await;
        let mut all = state.summaries_where(|_| true);
        all.sort_by(by_title);
        Ok(window.slice(&all).to_vec())
    }

    async fn list_featured_series(&self) -> Result<Vec<SeriesSummary>> {
        let state = self.state.read().await;
        let mut featured = state.summaries_where(|series| series.is_featured);
        featured.sort_by(by_rating_desc);
        Ok(featured)
    }

    async fn get_series(
        &self,
        series_id: SeriesID,
    ) -> Result<Option<SeriesDetails>> {
        let state = self.state.read().await;
        Ok(state
            .series
            .get(&series_id)
            .map(|series| series.details(state.season_count(series_id))))
    }

    async fn series_exists(&self, series_id: SeriesID) -> Result<bool> {
        Ok(self.state.read().await.series.contains_key(&series_id))
    }

    async fn list_seasons(&self, series_id: SeriesID) -> Result<Vec<Season>> {
        let state = self.state.read().await;
        let mut seasons: Vec<Season> = state
            .seasons
            .values()
            .filter(|season| season.series_id == series_id)
            .cloned()
            .collect();
        seasons.sort_by_key(|season| (season.number, season.id));
        Ok(seasons)
    }

    async fn find_season(
        &self,
        series_id: SeriesID,
        season_id: SeasonID,
    ) -> Result<Option<Season>> {
        let state = self.state.read().await;
        Ok(state
            .seasons
            .get(&season_id)
            .filter(|season| season.series_id == series_id)
            .cloned())
    }

    async fn list_episodes(&self, season_id: SeasonID) -> Result<Vec<Episode>> {
        let state = self.state.read().await;
        let mut episodes: Vec<Episode> = state
            .episodes
            .values()
            .filter(|episode| episode.season_id == season_id)
            .cloned()
            .collect();
        episodes.sort_by_key(|episode| (episode.number, episode.id));
        Ok(episodes)
    }

    async fn find_episode(
        &self,
        season_id: SeasonID,
        episode_id: EpisodeID,
    ) -> Result<Option<Episode>> {
        let state = self.state.read().await;
        Ok(state
            .episodes
            .get(&episode_id)
            .filter(|episode| episode.season_id == season_id)
            .cloned())
    }
}

#[async_trait]
impl FavoritesRepository for InMemoryCatalog {
    async fn list_favorite_series(
        &self,
        user_id: UserID,
    ) -> Result<Vec<SeriesSummary>> {
        let state = self.state.read().await;
        let mut favorites = state.summaries_where(|series| {
            state.favorites.contains(&(series.id, user_id))
        });
        favorites.sort_by(by_rating_desc);
        Ok(favorites)
    }

    async fn is_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool> {
        Ok(self
            .state
            .read()
            .await
            .favorites
            .contains(&(series_id, user_id)))
    }

    async fn add_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool> {
        let mut state = self.state.write().await;
        if !state.series.contains_key(&series_id) {
            return Err(CatalogError::NotFound(format!("series {series_id}")));
        }
        if !state.users.contains_key(&user_id) {
            return Err(CatalogError::NotFound(format!("user {user_id}")));
        }
        Ok(state.favorites.insert((series_id, user_id)))
    }

    async fn remove_favorite(
        &self,
        series_id: SeriesID,
        user_id: UserID,
    ) -> Result<bool> {
        Ok(self
            .state
            .write()
            .await
            .favorites
            .remove(&(series_id, user_id)))
    }
}

#[async_trait]
impl UsersRepository for InMemoryCatalog {
    async fn get_user_by_id(&self, user_id: UserID) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(&user_id).cloned())
    }

    async fn create_user(&self, username: &str) -> Result<User> {
        let mut state = self.state.write().await;
        if state.users.values().any(|user| user.username == username) {
            return Err(CatalogError::InvalidInput(format!(
                "username {username:?} is taken"
            )));
        }
        let user = User {
            id: UserID::new(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl AuthSessionRepository for InMemoryCatalog {
    async fn insert_session(
        &self,
        user_id: UserID,
        token_hash: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid> {
        let record = AuthSessionRecord {
            id: Uuid::new_v4(),
            user_id,
            created_at,
            expires_at,
            last_activity: created_at,
            revoked: false,
        };
        let id = record.id;
        self.state
            .write()
            .await
            .sessions
            .insert(id, (token_hash.to_string(), record));
        Ok(id)
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AuthSessionRecord>> {
        let state = self.state.read().await;
        Ok(state
            .sessions
            .values()
            .find(|(hash, _)| hash == token_hash)
            .map(|(_, record)| record.clone()))
    }

    async fn touch(&self, session_id: Uuid) -> Result<()> {
        if let Some((_, record)) =
            self.state.write().await.sessions.get_mut(&session_id)
        {
            record.last_activity = Utc::now();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn orphans_are_rejected() {
        let store = InMemoryCatalog::new();
        let season = Season {
            id: SeasonID::new(),
            series_id: SeriesID::new(),
            number: 1,
            title: None,
        };
        assert!(matches!(
            store.insert_season(season).await,
            Err(CatalogError::NotFound(_))
        ));

        let episode = Episode {
            id: EpisodeID::new(),
            season_id: SeasonID::new(),
            number: 1,
            title: "Pilot".into(),
            runtime_minutes: Some(42),
        };
        assert!(matches!(
            store.insert_episode(episode).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn favorites_have_set_semantics() {
        let store = InMemoryCatalog::new();
        let user = store.seed_user("alice").await;
        let series = store.seed_series("Dark", 8.7, false).await;

        assert!(store.add_favorite(series.id, user.id).await.unwrap());
        assert!(!store.add_favorite(series.id, user.id).await.unwrap());
        assert_eq!(store.favorite_count().await, 1);
        assert!(store.remove_favorite(series.id, user.id).await.unwrap());
        assert!(!store.remove_favorite(series.id, user.id).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_admit_one_username() {
        let store = InMemoryCatalog::new();
        let attempts: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create_user("alice").await })
            })
            .collect();

        let mut created = 0;
        for attempt in attempts {
            if attempt.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(store.state.read().await.users.len(), 1);
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = InMemoryCatalog::new();
        store.create_user("alice").await.unwrap();
        assert!(matches!(
            store.create_user("alice").await,
            Err(CatalogError::InvalidInput(_))
        ));
    }
}
