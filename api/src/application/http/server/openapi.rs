use crate::application::http::{
    health::HealthApiDoc, intake::router::IntakeApiDoc, llm::router::LLMApiDoc,
    screening::router::ScreeningApiDoc, server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SFIE Beauty API"
    ),
    paths(get_config),
    nest(
        (path = "/intake", api = IntakeApiDoc),
        (path = "/llm", api = LLMApiDoc),
        (path = "/screening", api = ScreeningApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
