use crate::database::{
    model::session::{SessionRow, SessionSummaryRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::SessionId,
    session::{ClassSession, SessionSummary},
};
use kernel::repository::session::SessionRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SessionRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn find_by_id(&self, session_id: SessionId) -> AppResult<Option<ClassSession>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
                SELECT id, class_id, session_date, start_time, capacity, status
                FROM class_sessions
                WHERE id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(ClassSession::from))
    }

    async fn find_available_by_date(&self, date: NaiveDate) -> AppResult<Vec<SessionSummary>> {
        let rows: Vec<SessionSummaryRow> = sqlx::query_as(
            r#"
                SELECT
                    s.id,
                    c.name AS class_name,
                    c.image_url,
                    s.session_date,
                    s.start_time,
                    s.capacity,
                    s.status
                FROM class_sessions AS s
                INNER JOIN classes AS c ON s.class_id = c.id
                WHERE s.session_date = $1 AND s.status = 'available'
                ORDER BY s.start_time
            "#,
        )
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(SessionSummary::from).collect())
    }
}
