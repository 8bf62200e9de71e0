use super::handlers::end_session::{__path_end_session, end_session};
use super::handlers::get_session::{__path_get_session, get_session};
use super::handlers::navigate::{__path_navigate, navigate};
use super::handlers::record_answer::{__path_record_answer, record_answer};
use super::handlers::screen_session_images::{
    __path_screen_session_images, screen_session_images,
};
use super::handlers::start_session::{__path_start_session, start_session};
use super::handlers::submit_session::{__path_submit_session, submit_session};
use crate::application::http::{screening::upload::MAX_UPLOAD_SIZE, server::app_state::AppState};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    start_session,
    get_session,
    record_answer,
    navigate,
    screen_session_images,
    submit_session,
    end_session
))]
pub struct IntakeApiDoc;

pub fn intake_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/intake/sessions", state.args.server.root_path),
            post(start_session),
        )
        .route(
            &format!(
                "{}/intake/sessions/{{session_id}}",
                state.args.server.root_path
            ),
            get(get_session).delete(end_session),
        )
        .route(
            &format!(
                "{}/intake/sessions/{{session_id}}/answers",
                state.args.server.root_path
            ),
            put(record_answer),
        )
        .route(
            &format!(
                "{}/intake/sessions/{{session_id}}/navigate",
                state.args.server.root_path
            ),
            post(navigate),
        )
        .route(
            &format!(
                "{}/intake/sessions/{{session_id}}/screening",
                state.args.server.root_path
            ),
            post(screen_session_images).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route(
            &format!(
                "{}/intake/sessions/{{session_id}}/submit",
                state.args.server.root_path
            ),
            post(submit_session),
        )
}
