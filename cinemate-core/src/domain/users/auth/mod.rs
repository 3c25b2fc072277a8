//! Bearer-session authentication.
//!
//! Tokens are opaque random strings handed to clients once; only their
//! HMAC-SHA-256 digest is persisted.

pub mod crypto;
pub mod service;

pub use crypto::{AuthCrypto, AuthCryptoError};
pub use service::{
    AuthenticationError, AuthenticationService, IssuedSession,
    ValidatedSession,
};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::ids::UserID;

/// Persisted session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSessionRecord {
    pub id: Uuid,
    pub user_id: UserID,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub revoked: bool,
}

/// The caller resolved from a bearer token.
///
/// Inserted into request extensions by the server's auth middleware and
/// passed explicitly into every operation that needs a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserID,
    pub session_id: Uuid,
}
