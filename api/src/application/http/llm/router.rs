use super::handlers::ask::{__path_ask, ask};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(ask))]
pub struct LLMApiDoc;

pub fn llm_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/llm/ask", state.args.server.root_path),
        post(ask),
    )
}
