use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::users::User;
use crate::error::Result;
use crate::types::ids::UserID;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn get_user_by_id(&self, user_id: UserID) -> Result<Option<User>>;

    async fn create_user(&self, username: &str) -> Result<User>;
}
