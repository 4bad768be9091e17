use crate::model::{
    id::{ReservationId, SessionId, UserId},
    session::SessionStatus,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, strum::Display,
)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

/// A held seat. Born confirmed by the commit step and never mutated here
/// afterwards.
#[derive(Debug)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub session_id: SessionId,
    pub user_id: UserId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// A member's reservation joined with the session it holds a seat in.
#[derive(Debug)]
pub struct ReservationDetail {
    pub reservation_id: ReservationId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub session: ReservedSession,
}

#[derive(Debug)]
pub struct ReservedSession {
    pub session_id: SessionId,
    pub class_name: String,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: SessionStatus,
}

// User-facing rejection reasons. The commit path re-checks under the
// transaction and must report the same wording as the pre-checks.

pub const INACTIVE_USER_REASON: &str = "Your account is inactive. Contact the administrator.";

pub const DUPLICATE_RESERVATION_REASON: &str =
    "You already have a confirmed reservation for this class.";

pub const CAPACITY_REACHED_REASON: &str =
    "Sorry, this class has already reached its maximum capacity.";

pub fn session_unavailable_reason(status: SessionStatus) -> String {
    format!("The session is not available (status: {status}).")
}

pub fn advance_notice_reason(min_hours_advance: i64) -> String {
    format!("Bookings require at least {min_hours_advance} hours advance notice.")
}

pub fn quota_reached_reason(max_active_reservations: i64) -> String {
    format!("You have reached your limit of {max_active_reservations} active reservations.")
}
