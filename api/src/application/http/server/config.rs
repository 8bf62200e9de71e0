use axum::extract::State;
use serde::{Deserialize, Serialize};
use sfie_core::domain::{
    common::APP_NAME,
    intake::WizardMode,
    screening::ACCEPTED_IMAGE_EXTENSIONS,
};
use utoipa::ToSchema;

use super::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_name: String,
    pub llm_configured: bool,
    pub classifier_configured: bool,
    pub accepted_image_types: Vec<String>,
    pub standalone_steps: u8,
    pub screening_steps: u8,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Deployment configuration",
    description = "Public facts about this deployment: which collaborators are configured and how long each wizard is.",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        app_name: APP_NAME.to_string(),
        llm_configured: state.args.llm.endpoint.is_some(),
        classifier_configured: state.args.classifier.endpoint.is_some(),
        accepted_image_types: ACCEPTED_IMAGE_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
        standalone_steps: WizardMode::Standalone.total_steps(),
        screening_steps: WizardMode::WithScreening.total_steps(),
    })
}
