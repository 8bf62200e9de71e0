use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::{AskInput, LLMAnswer, RequestOptions},
};

/// Client for the remote chat-completion endpoint.
///
/// An HTTP status failure is not an error: implementations return the
/// diagnostic text (status code and body) as the response. Errors are
/// reserved for transport failures, timeouts and undecodable bodies.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn get_response(
        &self,
        prompt: String,
        api_key: String,
        options: RequestOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait LLMService: Send + Sync {
    /// Free-text entry point guarded by the keyword gate.
    fn ask(&self, input: AskInput) -> impl Future<Output = Result<LLMAnswer, CoreError>> + Send;
}
