use axum::extract::{Multipart, Path, State};
use sfie_core::domain::intake::{ports::IntakeService, value_objects::WizardView};
use uuid::Uuid;

use crate::application::http::{
    screening::upload::read_images,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/screening",
    tag = "intake",
    summary = "Re-screen inside the questionnaire",
    description = "Classifies multipart `image` parts while the session is on its face re-screening step and stores the top three conditions per image.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = WizardView),
        (status = 422, description = "Session is not on the re-screening step"),
        (status = 503, description = "Classifier unavailable"),
    ),
)]
pub async fn screen_session_images(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<WizardView>, ApiError> {
    let images = read_images(multipart).await?;

    let session = state
        .service
        .screen_session_images(session_id, images)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(WizardView::from(&session)))
}
