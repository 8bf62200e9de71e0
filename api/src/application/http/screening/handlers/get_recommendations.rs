use axum::extract::{Path, State};
use sfie_core::domain::screening::{entities::ConditionRecommendations, ports::ScreeningService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/recommendations/{class}",
    tag = "screening",
    summary = "Get recommendations for a condition",
    params(
        ("class" = String, Path, description = "Condition class, matched exactly"),
    ),
    responses(
        (status = 200, body = ConditionRecommendations),
        (status = 404, description = "Unknown class"),
    ),
)]
pub async fn get_recommendations(
    Path(class): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ConditionRecommendations>, ApiError> {
    let recommendations = state
        .service
        .get_recommendations(&class)
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendations))
}
