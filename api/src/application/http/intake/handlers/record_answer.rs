use axum::extract::{Path, State};
use sfie_core::domain::intake::{ports::IntakeService, value_objects::WizardView};
use uuid::Uuid;

use crate::application::http::{
    intake::validators::RecordAnswerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/sessions/{session_id}/answers",
    tag = "intake",
    summary = "Answer the current step",
    description = "Records the answer of the step the session is on. Values must come from the step's options; repeated selections are kept once.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = RecordAnswerValidator,
    responses(
        (status = 200, body = WizardView),
        (status = 400, description = "Value outside the step's options"),
        (status = 422, description = "Answer does not belong to the current step"),
    ),
)]
pub async fn record_answer(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordAnswerValidator>,
) -> Result<Response<WizardView>, ApiError> {
    let session = state
        .service
        .record_answer(session_id, payload.answer)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(WizardView::from(&session)))
}
