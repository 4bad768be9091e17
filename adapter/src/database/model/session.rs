use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{ClassId, SessionId},
    session::{ClassSession, SessionStatus, SessionSummary},
};

#[derive(sqlx::FromRow)]
pub struct SessionRow {
    pub id: SessionId,
    pub class_id: ClassId,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub capacity: i32,
    pub status: SessionStatus,
}

impl From<SessionRow> for ClassSession {
    fn from(value: SessionRow) -> Self {
        let SessionRow {
            id,
            class_id,
            session_date,
            start_time,
            capacity,
            status,
        } = value;
        Self {
            session_id: id,
            class_id,
            session_date,
            start_time,
            capacity,
            status,
        }
    }
}

// Listing row joined with the classes table.
#[derive(sqlx::FromRow)]
pub struct SessionSummaryRow {
    pub id: SessionId,
    pub class_name: String,
    pub image_url: Option<String>,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub capacity: i32,
    pub status: SessionStatus,
}

impl From<SessionSummaryRow> for SessionSummary {
    fn from(value: SessionSummaryRow) -> Self {
        let SessionSummaryRow {
            id,
            class_name,
            image_url,
            session_date,
            start_time,
            capacity,
            status,
        } = value;
        Self {
            session_id: id,
            class_name,
            image_url,
            session_date,
            start_time,
            capacity,
            status,
        }
    }
}

// Seat data read under the row lock during a commit.
#[derive(sqlx::FromRow)]
pub struct SessionSeatRow {
    pub capacity: i32,
    pub status: SessionStatus,
}
