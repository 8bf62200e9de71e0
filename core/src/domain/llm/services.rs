use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    intake::ports::SessionRepository,
    llm::{
        keyword_gate::is_in_scope,
        ports::{LLMClient, LLMService},
        value_objects::{AskInput, LLMAnswer},
    },
    screening::ports::{ImageClassifier, RecommendationRepository},
};

/// Returns the API key when one was supplied.
pub(crate) fn require_api_key(api_key: Option<String>) -> Result<String, CoreError> {
    api_key
        .filter(|key| !key.is_empty())
        .ok_or(CoreError::MissingApiKey)
}

impl<L, C, RR, S> LLMService for Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    async fn ask(&self, input: AskInput) -> Result<LLMAnswer, CoreError> {
        let api_key = require_api_key(input.api_key)?;

        if input.prompt.is_empty() {
            return Err(CoreError::MissingPrompt);
        }

        if !is_in_scope(&input.prompt) {
            tracing::debug!("rejected out-of-scope prompt");
            return Err(CoreError::OutOfScopePrompt);
        }

        let response = self
            .llm_client
            .get_response(input.prompt.clone(), api_key, self.request_options)
            .await?;

        Ok(LLMAnswer {
            prompt: input.prompt,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{StubLLMClient, TestService, test_service},
        llm::value_objects::RequestOptions,
        screening::ports::MockRecommendationRepository,
    };

    fn service() -> TestService {
        test_service(
            StubLLMClient::new("Apply sunscreen every morning."),
            MockRecommendationRepository::new(),
            RequestOptions::default(),
        )
    }

    fn input(api_key: Option<&str>, prompt: &str) -> AskInput {
        AskInput {
            api_key: api_key.map(str::to_string),
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn test_require_api_key() {
        assert_eq!(require_api_key(Some("k".to_string())), Ok("k".to_string()));
        assert_eq!(require_api_key(Some(String::new())), Err(CoreError::MissingApiKey));
        assert_eq!(require_api_key(None), Err(CoreError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_ask_forwards_in_scope_prompt() {
        let service = service();

        let answer = service
            .ask(input(Some("secret"), "Is retinol safe for sensitive skin?"))
            .await
            .unwrap();

        assert_eq!(answer.response, "Apply sunscreen every morning.");
        assert_eq!(answer.prompt, "Is retinol safe for sensitive skin?");

        let calls = service.llm_client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].api_key, "secret");
        assert_eq!(calls[0].options, RequestOptions::default());
    }

    #[tokio::test]
    async fn test_ask_checks_key_before_prompt() {
        let service = service();

        assert_eq!(service.ask(input(None, "")).await, Err(CoreError::MissingApiKey));
        assert_eq!(
            service.ask(input(Some("secret"), "")).await,
            Err(CoreError::MissingPrompt)
        );
        assert!(service.llm_client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ask_rejects_out_of_scope_prompt() {
        let service = service();

        let result = service
            .ask(input(Some("secret"), "What is the best pizza topping?"))
            .await;

        assert_eq!(result, Err(CoreError::OutOfScopePrompt));
        assert!(service.llm_client.calls().is_empty());
    }
}
