use std::time::Duration;

use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{
        ports::LLMClient,
        value_objects::{MAX_TOKENS, RequestOptions, TEMPERATURE, TOP_P},
    },
};

/// Client for an OpenAI-style chat-completion endpoint. The bearer token is
/// supplied by the caller on every request.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    endpoint: Option<Url>,
    timeout: Duration,
    client: Client,
    self_signed_client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Decodes `bytes` as UTF-8, dropping invalid sequences instead of
/// replacing them.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

impl ChatCompletionClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder().build().map_err(|e| {
            CoreError::InternalServerError(format!("failed to build HTTP client: {}", e))
        })?;

        let self_signed_client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| {
                CoreError::InternalServerError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
            client,
            self_signed_client,
        })
    }

    fn http_client(&self, options: RequestOptions) -> &Client {
        if options.accept_self_signed {
            &self.self_signed_client
        } else {
            &self.client
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> CoreError {
        if e.is_timeout() {
            tracing::error!("LLM request timed out after {:?}", self.timeout);
            CoreError::LLMTimeout(self.timeout)
        } else {
            tracing::error!("LLM request failed: {}", e);
            CoreError::ExternalServiceError(format!("LLM API error: {}", e))
        }
    }
}

impl LLMClient for ChatCompletionClient {
    async fn get_response(
        &self,
        prompt: String,
        api_key: String,
        options: RequestOptions,
    ) -> Result<String, CoreError> {
        let endpoint = self.endpoint.as_ref().ok_or(CoreError::LLMNotConfigured)?;

        let request = ChatCompletionRequest {
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            stream: false,
        };

        let response = self
            .http_client(options)
            .post(endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let error_text = decode_ignoring_invalid(&body);
            tracing::error!("LLM API error: {} - {}", status, error_text);
            return Ok(format!(
                "The request failed with status code: {}\n{}",
                status.as_u16(),
                error_text
            ));
        }

        let completion: ChatCompletionResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}
