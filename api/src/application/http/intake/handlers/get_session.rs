use axum::extract::{Path, State};
use sfie_core::domain::intake::{ports::IntakeService, value_objects::WizardView};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    tag = "intake",
    summary = "Get the current step",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = WizardView),
        (status = 404, description = "Unknown or expired session"),
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<WizardView>, ApiError> {
    let session = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(WizardView::from(&session)))
}
