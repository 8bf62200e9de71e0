use super::handlers::get_recommendations::{__path_get_recommendations, get_recommendations};
use super::handlers::list_recommendations::{__path_list_recommendations, list_recommendations};
use super::handlers::predict::{__path_predict, predict};
use super::upload::MAX_UPLOAD_SIZE;
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict, list_recommendations, get_recommendations))]
pub struct ScreeningApiDoc;

pub fn screening_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/screening/predict", state.args.server.root_path),
            post(predict).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route(
            &format!("{}/screening/recommendations", state.args.server.root_path),
            get(list_recommendations),
        )
        .route(
            &format!(
                "{}/screening/recommendations/{{class}}",
                state.args.server.root_path
            ),
            get(get_recommendations),
        )
}
