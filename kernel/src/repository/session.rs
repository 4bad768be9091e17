use crate::model::{
    id::SessionId,
    session::{ClassSession, SessionSummary},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, session_id: SessionId) -> AppResult<Option<ClassSession>>;
    // Bookable sessions for one day, joined with their class for display.
    async fn find_available_by_date(&self, date: NaiveDate) -> AppResult<Vec<SessionSummary>>;
}
