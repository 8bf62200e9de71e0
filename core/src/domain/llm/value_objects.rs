use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_TOKENS: u32 = 1024;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 1.0;

/// Per-call transport settings for the chat-completion endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Accept self-signed certificates for this call only.
    pub accept_self_signed: bool,
}

#[derive(Debug, Clone)]
pub struct AskInput {
    pub api_key: Option<String>,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LLMAnswer {
    pub prompt: String,
    pub response: String,
}
