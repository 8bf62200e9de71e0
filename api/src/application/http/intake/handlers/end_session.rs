use axum::extract::{Path, State};
use sfie_core::domain::intake::ports::IntakeService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/sessions/{session_id}",
    tag = "intake",
    summary = "End an intake session",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Unknown or expired session"),
    ),
)]
pub async fn end_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .end_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
