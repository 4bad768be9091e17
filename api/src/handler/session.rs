use crate::model::session::{SessionListQuery, SessionsResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_session_list(
    Query(query): Query<SessionListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SessionsResponse>> {
    query.validate(&())?;

    registry
        .session_repository()
        .find_available_by_date(query.date)
        .await
        .map(SessionsResponse::from)
        .map(Json)
}
