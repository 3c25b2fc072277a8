use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::users::auth::AuthSessionRecord;
use crate::error::Result;
use crate::types::ids::UserID;

#[async_trait]
pub trait AuthSessionRepository: Send + Sync {
    async fn insert_session(
        &self,
        user_id: UserID,
        token_hash: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid>;

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AuthSessionRecord>>;

    async fn touch(&self, session_id: Uuid) -> Result<()>;
}
