use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::{
    id::{ReservationId, SessionId, UserId},
    reservation::{
        event::ReserveSeat, Reservation, ReservationDetail, ReservationStatus, ReservedSession,
    },
    session::SessionStatus,
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

pub const MISSING_PARAMETERS_REASON: &str = "session_id and user_id are required.";

pub const BOOKING_CONFIRMED_MESSAGE: &str = "Reservation confirmed successfully.";

#[derive(Debug, Default, Deserialize)]
pub struct BookSessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl BookSessionRequest {
    /// Missing, blank, and malformed identifiers are all parameter errors;
    /// nothing touches the store before this passes.
    pub fn into_event(self) -> AppResult<ReserveSeat> {
        let session_id = self
            .session_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let user_id = self
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let (Some(session_id), Some(user_id)) = (session_id, user_id) else {
            return Err(AppError::InvalidParameter(MISSING_PARAMETERS_REASON.into()));
        };

        let session_id = session_id
            .parse::<SessionId>()
            .map_err(|_| AppError::InvalidParameter("session_id must be a valid UUID.".into()))?;
        let user_id = user_id
            .parse::<UserId>()
            .map_err(|_| AppError::InvalidParameter("user_id must be a valid UUID.".into()))?;

        Ok(ReserveSeat::new(session_id, user_id))
    }
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub message: String,
    pub data: ReservationResponse,
}

impl From<Reservation> for BookingResponse {
    fn from(value: Reservation) -> Self {
        Self {
            message: BOOKING_CONFIRMED_MESSAGE.into(),
            data: value.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub session_id: SessionId,
    pub user_id: UserId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            session_id,
            user_id,
            status,
            created_at,
        } = value;
        Self {
            id: reservation_id,
            session_id,
            user_id,
            status,
            created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ReservationsResponse {
    pub items: Vec<ReservationDetailResponse>,
}

impl From<Vec<ReservationDetail>> for ReservationsResponse {
    fn from(value: Vec<ReservationDetail>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(ReservationDetailResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ReservationDetailResponse {
    pub id: ReservationId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub session: ReservedSessionResponse,
}

impl From<ReservationDetail> for ReservationDetailResponse {
    fn from(value: ReservationDetail) -> Self {
        let ReservationDetail {
            reservation_id,
            status,
            created_at,
            session,
        } = value;
        Self {
            id: reservation_id,
            status,
            created_at,
            session: session.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ReservedSessionResponse {
    pub id: SessionId,
    pub class_name: String,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: SessionStatus,
}

impl From<ReservedSession> for ReservedSessionResponse {
    fn from(value: ReservedSession) -> Self {
        let ReservedSession {
            session_id,
            class_name,
            session_date,
            start_time,
            status,
        } = value;
        Self {
            id: session_id,
            class_name,
            session_date,
            start_time,
            status,
        }
    }
}
