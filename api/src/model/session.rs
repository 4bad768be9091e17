use chrono::{NaiveDate, NaiveTime};
use garde::Validate;
use kernel::model::{
    id::SessionId,
    session::{SessionStatus, SessionSummary},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct SessionListQuery {
    #[garde(skip)]
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct SessionsResponse {
    pub items: Vec<SessionSummaryResponse>,
}

impl From<Vec<SessionSummary>> for SessionsResponse {
    fn from(value: Vec<SessionSummary>) -> Self {
        Self {
            items: value.into_iter().map(SessionSummaryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct SessionSummaryResponse {
    pub id: SessionId,
    pub class_name: String,
    pub image_url: Option<String>,
    pub session_date: NaiveDate,
    pub start_time: NaiveTime,
    pub capacity: i32,
    pub status: SessionStatus,
}

impl From<SessionSummary> for SessionSummaryResponse {
    fn from(value: SessionSummary) -> Self {
        let SessionSummary {
            session_id,
            class_name,
            image_url,
            session_date,
            start_time,
            capacity,
            status,
        } = value;
        Self {
            id: session_id,
            class_name,
            image_url,
            session_date,
            start_time,
            capacity,
            status,
        }
    }
}
