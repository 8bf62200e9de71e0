use axum::extract::State;
use sfie_core::domain::intake::{ports::IntakeService, value_objects::WizardView};

use crate::application::http::{
    intake::validators::StartSessionValidator,
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
    path = "/sessions",
    tag = "intake",
    summary = "Start an intake session",
    description = "Opens a questionnaire session on its welcome step. The `with_screening` mode adds the optional face re-screening step before submission.",
    request_body = StartSessionValidator,
    responses(
        (status = 201, body = WizardView)
    ),
)]
pub async fn start_session(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<StartSessionValidator>,
) -> Result<Response<WizardView>, ApiError> {
    let session = state
        .service
        .start_session(payload.mode)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(WizardView::from(&session)))
}
