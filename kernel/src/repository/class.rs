use crate::model::class::Class;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn find_active(&self) -> AppResult<Vec<Class>>;
}
