use crate::database::{
    model::{
        reservation::{ReservationDetailRow, ReservationRow},
        session::SessionSeatRow,
    },
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{SessionId, UserId},
    reservation::{
        event::ReserveSeat, session_unavailable_reason, Reservation, ReservationDetail,
        CAPACITY_REACHED_REASON, DUPLICATE_RESERVATION_REASON,
    },
    session::SessionStatus,
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // The commit step. The handler's pre-checks are advisory only; everything
    // that guards an invariant is re-checked here under the transaction.
    async fn reserve(&self, event: ReserveSeat) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        // Lock the target session row. Concurrent attempts for the same
        // session queue on this lock, so the seat count read below stays
        // stable through the insert. Dropping the transaction on any early
        // return rolls everything back.
        let session: Option<SessionSeatRow> = sqlx::query_as(
            r#"
                SELECT capacity, status
                FROM class_sessions
                WHERE id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.session_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(session) = session else {
            return Err(AppError::EntityNotFound(format!(
                "session {} was not found",
                event.session_id
            )));
        };

        if session.status != SessionStatus::Available {
            return Err(AppError::UnprocessableEntity(session_unavailable_reason(
                session.status,
            )));
        }

        let (already_booked,): (bool,) = sqlx::query_as(
            r#"
                SELECT EXISTS (
                    SELECT 1
                    FROM reservations
                    WHERE session_id = $1 AND user_id = $2 AND status = 'confirmed'
                )
            "#,
        )
        .bind(event.session_id)
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if already_booked {
            return Err(AppError::UnprocessableEntity(
                DUPLICATE_RESERVATION_REASON.into(),
            ));
        }

        let (confirmed,): (i64,) = sqlx::query_as(
            r#"
                SELECT COUNT(*)
                FROM reservations
                WHERE session_id = $1 AND status = 'confirmed'
            "#,
        )
        .bind(event.session_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if confirmed >= i64::from(session.capacity) {
            return Err(AppError::UnprocessableEntity(CAPACITY_REACHED_REASON.into()));
        }

        let row: ReservationRow = sqlx::query_as(
            r#"
                INSERT INTO reservations (session_id, user_id, status)
                VALUES ($1, $2, 'confirmed')
                RETURNING id, session_id, user_id, status, created_at
            "#,
        )
        .bind(event.session_id)
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // The partial unique index is the backstop for the duplicate
            // re-check above; report it as the same business rejection.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UnprocessableEntity(DUPLICATE_RESERVATION_REASON.into());
                }
            }
            AppError::SpecificOperationError(e)
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(row.into())
    }

    async fn exists_confirmed(&self, session_id: SessionId, user_id: UserId) -> AppResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            r#"
                SELECT EXISTS (
                    SELECT 1
                    FROM reservations
                    WHERE session_id = $1 AND user_id = $2 AND status = 'confirmed'
                )
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(exists)
    }

    async fn count_confirmed_by_session(&self, session_id: SessionId) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
                SELECT COUNT(*)
                FROM reservations
                WHERE session_id = $1 AND status = 'confirmed'
            "#,
        )
        .bind(session_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(count)
    }

    async fn count_confirmed_by_user(&self, user_id: UserId) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
                SELECT COUNT(*)
                FROM reservations
                WHERE user_id = $1 AND status = 'confirmed'
            "#,
        )
        .bind(user_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(count)
    }

    async fn find_confirmed_by_user(&self, user_id: UserId) -> AppResult<Vec<ReservationDetail>> {
        let rows: Vec<ReservationDetailRow> = sqlx::query_as(
            r#"
                SELECT
                    r.id,
                    r.status,
                    r.created_at,
                    s.id AS session_id,
                    c.name AS class_name,
                    s.session_date,
                    s.start_time,
                    s.status AS session_status
                FROM reservations AS r
                INNER JOIN class_sessions AS s ON r.session_id = s.id
                INNER JOIN classes AS c ON s.class_id = c.id
                WHERE r.user_id = $1 AND r.status = 'confirmed'
                ORDER BY s.session_date, s.start_time
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ReservationDetail::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime, Utc};
    use kernel::model::reservation::ReservationStatus;
    use std::sync::Arc;

    async fn seed_member(pool: &sqlx::PgPool, name: &str) -> anyhow::Result<UserId> {
        let (id,): (UserId,) =
            sqlx::query_as("INSERT INTO profiles (user_name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(pool)
                .await?;
        Ok(id)
    }

    async fn seed_session(
        pool: &sqlx::PgPool,
        capacity: i32,
        status: SessionStatus,
    ) -> anyhow::Result<SessionId> {
        let (class_id,): (uuid::Uuid,) =
            sqlx::query_as("INSERT INTO classes (name) VALUES ('Yoga') RETURNING id")
                .fetch_one(pool)
                .await?;

        let (id,): (SessionId,) = sqlx::query_as(
            "INSERT INTO class_sessions (class_id, session_date, start_time, capacity, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(class_id)
        .bind((Utc::now() + Duration::days(7)).date_naive())
        .bind(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
        .bind(capacity)
        .bind(status)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    #[sqlx::test]
    async fn reserve_claims_a_seat(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_id = seed_member(&pool, "Alex").await?;
        let session_id = seed_session(&pool, 10, SessionStatus::Available).await?;

        let reservation = repo.reserve(ReserveSeat::new(session_id, user_id)).await?;

        assert_eq!(reservation.session_id, session_id);
        assert_eq!(reservation.user_id, user_id);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(repo.count_confirmed_by_session(session_id).await?, 1);
        assert!(repo.exists_confirmed(session_id, user_id).await?);

        Ok(())
    }

    #[sqlx::test]
    async fn reserve_rejects_second_attempt_for_same_pair(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_id = seed_member(&pool, "Alex").await?;
        let session_id = seed_session(&pool, 10, SessionStatus::Available).await?;

        repo.reserve(ReserveSeat::new(session_id, user_id)).await?;
        let err = repo
            .reserve(ReserveSeat::new(session_id, user_id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert_eq!(err.to_string(), DUPLICATE_RESERVATION_REASON);
        assert_eq!(repo.count_confirmed_by_session(session_id).await?, 1);

        Ok(())
    }

    #[sqlx::test]
    async fn reserve_rejects_when_session_is_full(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let session_id = seed_session(&pool, 1, SessionStatus::Available).await?;

        let first = seed_member(&pool, "Alex").await?;
        repo.reserve(ReserveSeat::new(session_id, first)).await?;

        let second = seed_member(&pool, "Robin").await?;
        let err = repo
            .reserve(ReserveSeat::new(session_id, second))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), CAPACITY_REACHED_REASON);
        assert_eq!(repo.count_confirmed_by_session(session_id).await?, 1);

        Ok(())
    }

    #[sqlx::test]
    async fn reserve_rejects_unavailable_session(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_id = seed_member(&pool, "Alex").await?;
        let session_id = seed_session(&pool, 10, SessionStatus::Cancelled).await?;

        let err = repo
            .reserve(ReserveSeat::new(session_id, user_id))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "The session is not available (status: cancelled)."
        );
        assert_eq!(repo.count_confirmed_by_session(session_id).await?, 0);

        Ok(())
    }

    #[sqlx::test]
    async fn reserve_reports_missing_session(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_id = seed_member(&pool, "Alex").await?;

        let err = repo
            .reserve(ReserveSeat::new(SessionId::new(), user_id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EntityNotFound(_)));

        Ok(())
    }

    // Two near-simultaneous attempts for the last remaining seat: exactly one
    // may win, the loser must see the capacity rejection, and the final count
    // must not exceed the capacity.
    #[sqlx::test]
    async fn concurrent_attempts_cannot_overbook_the_last_seat(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = Arc::new(ReservationRepositoryImpl::new(ConnectionPool::new(
            pool.clone(),
        )));
        let session_id = seed_session(&pool, 1, SessionStatus::Available).await?;
        let alex = seed_member(&pool, "Alex").await?;
        let robin = seed_member(&pool, "Robin").await?;

        let first = tokio::spawn({
            let repo = Arc::clone(&repo);
            async move { repo.reserve(ReserveSeat::new(session_id, alex)).await }
        });
        let second = tokio::spawn({
            let repo = Arc::clone(&repo);
            async move { repo.reserve(ReserveSeat::new(session_id, robin)).await }
        });

        let (first, second) = (first.await?, second.await?);

        assert!(
            first.is_ok() != second.is_ok(),
            "exactly one of the two attempts must win the seat"
        );
        let loser = first.err().or(second.err()).unwrap();
        assert_eq!(loser.to_string(), CAPACITY_REACHED_REASON);
        assert_eq!(repo.count_confirmed_by_session(session_id).await?, 1);

        Ok(())
    }

    #[sqlx::test]
    async fn find_confirmed_by_user_joins_session_and_class(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_id = seed_member(&pool, "Alex").await?;
        let session_id = seed_session(&pool, 10, SessionStatus::Available).await?;

        repo.reserve(ReserveSeat::new(session_id, user_id)).await?;

        let details = repo.find_confirmed_by_user(user_id).await?;
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].status, ReservationStatus::Confirmed);
        assert_eq!(details[0].session.session_id, session_id);
        assert_eq!(details[0].session.class_name, "Yoga");

        Ok(())
    }

    #[sqlx::test]
    async fn counts_ignore_other_sessions_and_users(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let alex = seed_member(&pool, "Alex").await?;
        let robin = seed_member(&pool, "Robin").await?;
        let yoga = seed_session(&pool, 10, SessionStatus::Available).await?;
        let spin = seed_session(&pool, 10, SessionStatus::Available).await?;

        repo.reserve(ReserveSeat::new(yoga, alex)).await?;
        repo.reserve(ReserveSeat::new(spin, alex)).await?;
        repo.reserve(ReserveSeat::new(yoga, robin)).await?;

        assert_eq!(repo.count_confirmed_by_session(yoga).await?, 2);
        assert_eq!(repo.count_confirmed_by_session(spin).await?, 1);
        assert_eq!(repo.count_confirmed_by_user(alex).await?, 2);
        assert_eq!(repo.count_confirmed_by_user(robin).await?, 1);
        assert!(!repo.exists_confirmed(spin, robin).await?);

        Ok(())
    }
}
