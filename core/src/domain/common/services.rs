use std::sync::Arc;

use crate::domain::{
    intake::ports::SessionRepository,
    llm::{ports::LLMClient, value_objects::RequestOptions},
    screening::ports::{ImageClassifier, RecommendationRepository},
};

/// Aggregates every port the domain services need. The service traits
/// (`IntakeService`, `LLMService`, `ScreeningService`) are implemented on it.
pub struct Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    pub(crate) llm_client: Arc<L>,
    pub(crate) classifier: Arc<C>,
    pub(crate) recommendation_repository: Arc<RR>,
    pub(crate) session_repository: Arc<S>,
    pub(crate) request_options: RequestOptions,
}

impl<L, C, RR, S> Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    pub fn new(
        llm_client: L,
        classifier: C,
        recommendation_repository: RR,
        session_repository: S,
        request_options: RequestOptions,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            classifier: Arc::new(classifier),
            recommendation_repository: Arc::new(recommendation_repository),
            session_repository: Arc::new(session_repository),
            request_options,
        }
    }
}

impl<L, C, RR, S> Clone for Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            classifier: Arc::clone(&self.classifier),
            recommendation_repository: Arc::clone(&self.recommendation_repository),
            session_repository: Arc::clone(&self.session_repository),
            request_options: self.request_options,
        }
    }
}
