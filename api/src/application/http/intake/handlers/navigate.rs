use axum::extract::{Path, State};
use sfie_core::domain::intake::{ports::IntakeService, value_objects::WizardView};
use uuid::Uuid;

use crate::application::http::{
    intake::validators::NavigateValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/navigate",
    tag = "intake",
    summary = "Move between steps",
    description = "`back` on the first step leaves the session where it is. `next` needs the current step answered and is refused on the final step, which is submitted instead.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = NavigateValidator,
    responses(
        (status = 200, body = WizardView),
        (status = 422, description = "Current step unanswered or already final"),
    ),
)]
pub async fn navigate(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NavigateValidator>,
) -> Result<Response<WizardView>, ApiError> {
    let session = state
        .service
        .navigate(session_id, payload.action)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(WizardView::from(&session)))
}
