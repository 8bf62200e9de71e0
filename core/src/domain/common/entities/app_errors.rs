use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Please provide an API key.")]
    MissingApiKey,

    #[error("Enter your prompt.")]
    MissingPrompt,

    #[error("Irrelevant prompt.")]
    OutOfScopePrompt,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    InvalidAnswer(String),

    #[error("An answer is required before continuing: {0}")]
    AnswerRequired(String),

    #[error("The session is on step {current}, which does not accept this action")]
    StepMismatch { current: u8 },

    #[error("Submission is only available on the final step")]
    NotAtFinalStep,

    #[error("The final step submits the questionnaire instead of advancing")]
    FinalStepReached,

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Image classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("Recommendation table unavailable: {0}")]
    RecommendationsUnavailable(String),

    #[error("LLM endpoint is not configured")]
    LLMNotConfigured,

    #[error("The LLM request timed out after {0:?}")]
    LLMTimeout(Duration),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
