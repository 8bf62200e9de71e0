use crate::{
    domain::{
        common::{SfieConfig, entities::app_errors::CoreError, services::Service},
        llm::value_objects::RequestOptions,
    },
    infrastructure::{
        classifier::RemoteClassifier, llm::ChatCompletionClient,
        recommendation::SpreadsheetRecommendationRepository, session::InMemorySessionRepository,
    },
};

pub type SfieService = Service<
    ChatCompletionClient,
    RemoteClassifier,
    SpreadsheetRecommendationRepository,
    InMemorySessionRepository,
>;

/// Wires the production adapters. A missing classifier endpoint or an
/// unreadable recommendation table does not fail startup; the affected
/// operations report the problem when called.
pub async fn create_service(config: SfieConfig) -> Result<SfieService, CoreError> {
    let llm_client = ChatCompletionClient::new(&config.llm)?;

    let classifier = RemoteClassifier::new(&config.classifier);
    if !classifier.is_configured() {
        tracing::warn!("no classifier endpoint configured, screening is disabled");
    }

    let recommendation_repository = SpreadsheetRecommendationRepository::load(&config.recommendation);
    let session_repository = InMemorySessionRepository::new(config.session.ttl);

    if config.llm.accept_self_signed {
        tracing::warn!("LLM requests accept self-signed certificates");
    }

    Ok(Service::new(
        llm_client,
        classifier,
        recommendation_repository,
        session_repository,
        RequestOptions {
            accept_self_signed: config.llm.accept_self_signed,
        },
    ))
}
