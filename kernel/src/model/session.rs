use crate::model::id::{ClassId, SessionId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, strum::Display,
)]
#[sqlx(type_name = "session_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Available,
    Full,
    Cancelled,
}

/// One scheduled occurrence of a class with a fixed start and seat capacity.
#[derive(Debug)]
pub struct ClassSession {
    pub session_id: SessionId,
    pub class_id: ClassId,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub capacity: i32,
    pub status: SessionStatus,
}

impl ClassSession {
    /// Session start as an instant. Dates and times are stored naive and
    /// interpreted as UTC.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.session_date.and_time(self.start_time).and_utc()
    }
}

/// Listing view of a session joined with its class.
#[derive(Debug)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub class_name: String,
    pub image_url: Option<String>,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub capacity: i32,
    pub status: SessionStatus,
}
