use axum::extract::State;
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use sfie_core::domain::llm::{
    ports::LLMService,
    value_objects::{AskInput, LLMAnswer},
};

use crate::application::http::{
    llm::validators::{AskValidator, resolve_api_key},
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
    path = "/ask",
    tag = "llm",
    summary = "Ask a skincare question",
    description = "Forwards a skincare-related prompt to the hosted model. The API key may be sent in the body or as a bearer token. Missing key, empty prompt and off-topic prompts are rejected in that order.",
    request_body = AskValidator,
    responses(
        (status = 200, body = LLMAnswer),
        (status = 400, description = "Missing API key or prompt"),
        (status = 422, description = "Prompt is not about skincare"),
    ),
)]
pub async fn ask(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    ValidateJson(payload): ValidateJson<AskValidator>,
) -> Result<Response<LLMAnswer>, ApiError> {
    let answer = state
        .service
        .ask(AskInput {
            api_key: resolve_api_key(payload.api_key, bearer),
            prompt: payload.prompt,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(answer))
}
