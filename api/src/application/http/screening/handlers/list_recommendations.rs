use axum::extract::State;
use serde::{Deserialize, Serialize};
use sfie_core::domain::screening::{entities::ConditionRecommendations, ports::ScreeningService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendationsResponse {
    pub data: Vec<ConditionRecommendations>,
}

#[utoipa::path(
    get,
    path = "/recommendations",
    tag = "screening",
    summary = "List product recommendations",
    description = "Every condition class of the recommendation table, in table order, with its products.",
    responses(
        (status = 200, body = RecommendationsResponse),
        (status = 503, description = "Recommendation table could not be loaded"),
    ),
)]
pub async fn list_recommendations(
    State(state): State<AppState>,
) -> Result<Response<RecommendationsResponse>, ApiError> {
    let data = state
        .service
        .list_recommendations()
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendationsResponse { data }))
}
