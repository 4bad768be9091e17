use crate::model::reservation::{BookSessionRequest, BookingResponse, ReservationsResponse};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Duration, Utc};
use kernel::model::{
    id::UserId,
    reservation::{
        advance_notice_reason, quota_reached_reason, session_unavailable_reason,
        CAPACITY_REACHED_REASON, DUPLICATE_RESERVATION_REASON, INACTIVE_USER_REASON,
    },
    session::SessionStatus,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// The single entry point for creating reservations. Validates the attempt
/// against the current context, then hands it to the repository whose
/// transaction re-affirms capacity and uniqueness before inserting.
pub async fn book_session(
    State(registry): State<AppRegistry>,
    Json(req): Json<BookSessionRequest>,
) -> AppResult<Json<BookingResponse>> {
    let event = req.into_event()?;

    // The three context reads are independent of one another; fan them out
    // and join before any gate runs.
    let users = registry.user_repository();
    let sessions = registry.session_repository();
    let settings_repo = registry.settings_repository();
    let (profile, session, settings) = tokio::join!(
        users.find_profile(event.user_id),
        sessions.find_by_id(event.session_id),
        settings_repo.resolve(),
    );

    let profile = profile?.ok_or_else(|| {
        AppError::EntityNotFound(format!("user {} was not found", event.user_id))
    })?;
    let session = session?.ok_or_else(|| {
        AppError::EntityNotFound(format!("session {} was not found", event.session_id))
    })?;

    // Gate order is fixed; the first failure decides which reason the caller
    // sees. These checks are advisory under concurrency, the commit below is
    // what actually protects the invariants.
    let reservations = registry.reservation_repository();

    if !profile.is_active {
        return Err(AppError::UnprocessableEntity(INACTIVE_USER_REASON.into()));
    }

    if session.status != SessionStatus::Available {
        return Err(AppError::UnprocessableEntity(session_unavailable_reason(
            session.status,
        )));
    }

    if reservations
        .exists_confirmed(event.session_id, event.user_id)
        .await?
    {
        return Err(AppError::UnprocessableEntity(
            DUPLICATE_RESERVATION_REASON.into(),
        ));
    }

    if session.starts_at() - Utc::now() < Duration::hours(settings.min_hours_advance) {
        return Err(AppError::UnprocessableEntity(advance_notice_reason(
            settings.min_hours_advance,
        )));
    }

    if reservations
        .count_confirmed_by_session(event.session_id)
        .await?
        >= i64::from(session.capacity)
    {
        return Err(AppError::UnprocessableEntity(CAPACITY_REACHED_REASON.into()));
    }

    if reservations.count_confirmed_by_user(event.user_id).await?
        >= settings.max_active_reservations
    {
        return Err(AppError::UnprocessableEntity(quota_reached_reason(
            settings.max_active_reservations,
        )));
    }

    let reservation = reservations.reserve(event).await?;

    Ok(Json(BookingResponse::from(reservation)))
}

pub async fn show_user_reservations(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_confirmed_by_user(user_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
