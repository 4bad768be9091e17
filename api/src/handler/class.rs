use crate::model::class::ClassesResponse;
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_class_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClassesResponse>> {
    registry
        .class_repository()
        .find_active()
        .await
        .map(ClassesResponse::from)
        .map(Json)
}
