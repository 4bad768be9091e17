use crate::model::{id::UserId, user::UserProfile};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>>;
}
