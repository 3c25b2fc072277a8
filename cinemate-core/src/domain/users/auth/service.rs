use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::crypto::{AuthCrypto, AuthCryptoError};
use crate::database::ports::{
    sessions::AuthSessionRepository, users::UsersRepository,
};
use crate::error::CatalogError;
use crate::types::ids::UserID;

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("session is unknown, revoked or expired")]
    SessionExpired,
    #[error("user not found")]
    UserNotFound,
    #[error("session lifetime must be positive")]
    InvalidLifetime,
    #[error("crypto failure: {0}")]
    Crypto(#[from] AuthCryptoError),
    #[error("database error: {0}")]
    DatabaseError(String),
}

impl From<CatalogError> for AuthenticationError {
    fn from(err: CatalogError) -> Self {
        AuthenticationError::DatabaseError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSession {
    pub session_id: Uuid,
    pub user_id: UserID,
    pub expires_at: DateTime<Utc>,
}

/// A newly created session. `token` is only ever available here.
#[derive(Clone)]
pub struct IssuedSession {
    pub session_id: Uuid,
    pub user_id: UserID,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl fmt::Debug for IssuedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedSession")
            .field("session_id", &self.session_id)
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

pub struct AuthenticationService {
    crypto: Arc<AuthCrypto>,
    session_store: Arc<dyn AuthSessionRepository>,
    user_repo: Arc<dyn UsersRepository>,
}

impl fmt::Debug for AuthenticationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationService")
            .field("crypto", &"AuthCrypto")
            .finish_non_exhaustive()
    }
}

impl AuthenticationService {
    pub fn new(
        crypto: Arc<AuthCrypto>,
        session_store: Arc<dyn AuthSessionRepository>,
        user_repo: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            crypto,
            session_store,
            user_repo,
        }
    }

    /// Create a session for an existing user and hand back the raw token.
    pub async fn issue_session(
        &self,
        user_id: UserID,
        lifetime: Duration,
    ) -> Result<IssuedSession, AuthenticationError> {
        if lifetime <= Duration::zero() {
            return Err(AuthenticationError::InvalidLifetime);
        }

        self.user_repo
            .get_user_by_id(user_id)
            .await?
            .ok_or(AuthenticationError::UserNotFound)?;

        let token = self.crypto.generate_token()?;
        let token_hash = self.crypto.hash_token(&token);
        let created_at = Utc::now();
        let expires_at = created_at + lifetime;

        let session_id = self
            .session_store
            .insert_session(user_id, &token_hash, created_at, expires_at)
            .await?;

        info!(%user_id, %session_id, %expires_at, "issued session");

        Ok(IssuedSession {
            session_id,
            user_id,
            token,
            expires_at,
        })
    }

    pub async fn validate_session_token(
        &self,
        token: &str,
    ) -> Result<ValidatedSession, AuthenticationError> {
        let token_hash = self.crypto.hash_token(token);

        let record = self
            .session_store
            .find_by_hash(&token_hash)
            .await?
            .ok_or(AuthenticationError::SessionExpired)?;

        if record.revoked {
            debug!(session_id = %record.id, "rejected revoked session");
            return Err(AuthenticationError::SessionExpired);
        }

        if record.expires_at < Utc::now() {
            debug!(session_id = %record.id, "rejected expired session");
            return Err(AuthenticationError::SessionExpired);
        }

        self.session_store.touch(record.id).await?;

        Ok(ValidatedSession {
            session_id: record.id,
            user_id: record.user_id,
            expires_at: record.expires_at,
        })
    }
}
