use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::{ReservationId, SessionId, UserId},
    reservation::{Reservation, ReservationDetail, ReservationStatus, ReservedSession},
    session::SessionStatus,
};

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub session_id: SessionId,
    pub user_id: UserId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            id,
            session_id,
            user_id,
            status,
            created_at,
        } = value;
        Self {
            reservation_id: id,
            session_id,
            user_id,
            status,
            created_at,
        }
    }
}

// Listing row joined with class_sessions and classes.
#[derive(sqlx::FromRow)]
pub struct ReservationDetailRow {
    pub id: ReservationId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub session_id: SessionId,
    pub class_name: String,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub session_status: SessionStatus,
}

impl From<ReservationDetailRow> for ReservationDetail {
    fn from(value: ReservationDetailRow) -> Self {
        let ReservationDetailRow {
            id,
            status,
            created_at,
            session_id,
            class_name,
            session_date,
            start_time,
            session_status,
        } = value;
        Self {
            reservation_id: id,
            status,
            created_at,
            session: ReservedSession {
                session_id,
                class_name,
                session_date,
                start_time,
                status: session_status,
            },
        }
    }
}
