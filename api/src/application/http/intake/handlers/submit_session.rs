use axum::extract::{Path, State};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use sfie_core::domain::{
    intake::{ports::IntakeService, value_objects::SubmitIntakeInput},
    llm::value_objects::LLMAnswer,
};
use uuid::Uuid;

use crate::application::http::{
    intake::validators::SubmitSessionValidator,
    llm::validators::resolve_api_key,
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
    path = "/sessions/{session_id}/submit",
    tag = "intake",
    summary = "Submit the questionnaire",
    description = "Builds the recommendation prompt from the recorded answers and returns the model's reply. Only available on the final step. The body is optional when the key is sent as a Bearer token.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = SubmitSessionValidator,
    responses(
        (status = 200, body = LLMAnswer),
        (status = 400, description = "Missing API key"),
        (status = 422, description = "Session is not on its final step"),
        (status = 504, description = "The model did not answer in time"),
    ),
)]
pub async fn submit_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    payload: Option<ValidateJson<SubmitSessionValidator>>,
) -> Result<Response<LLMAnswer>, ApiError> {
    let answer = state
        .service
        .submit(SubmitIntakeInput {
            session_id,
            api_key: resolve_api_key(
                payload.and_then(|ValidateJson(body)| body.api_key),
                bearer,
            ),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(answer))
}
