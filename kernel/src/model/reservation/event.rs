use crate::model::id::{SessionId, UserId};
use derive_new::new;

/// A gate-approved booking attempt, ready for the atomic commit.
#[derive(Debug, Clone, Copy, new)]
pub struct ReserveSeat {
    pub session_id: SessionId,
    pub user_id: UserId,
}
