//! User accounts as seen by the catalog: the other end of the favorites
//! relation and the subject of bearer sessions.

pub mod auth;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ids::UserID;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserID,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
