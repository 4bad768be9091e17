use crate::model::{
    id::{SessionId, UserId},
    reservation::{event::ReserveSeat, Reservation, ReservationDetail},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Claims a seat. Re-checks session availability, the duplicate pair, and
    /// the seat count inside one transaction; exactly one of two concurrent
    /// attempts on the last seat can succeed.
    async fn reserve(&self, event: ReserveSeat) -> AppResult<Reservation>;

    async fn exists_confirmed(&self, session_id: SessionId, user_id: UserId) -> AppResult<bool>;
    async fn count_confirmed_by_session(&self, session_id: SessionId) -> AppResult<i64>;
    async fn count_confirmed_by_user(&self, user_id: UserId) -> AppResult<i64>;
    async fn find_confirmed_by_user(&self, user_id: UserId) -> AppResult<Vec<ReservationDetail>>;
}
