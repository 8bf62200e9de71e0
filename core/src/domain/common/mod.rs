use std::{path::PathBuf, time::Duration};

use url::Url;

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub const APP_NAME: &str = "SFIE Beauty Sandbox";

#[derive(Clone, Debug)]
pub struct SfieConfig {
    pub llm: LLMConfig,
    pub classifier: ClassifierConfig,
    pub recommendation: RecommendationConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub endpoint: Option<Url>,
    pub timeout: Duration,
    /// Deployment-level default for [`crate::domain::llm::value_objects::RequestOptions`].
    pub accept_self_signed: bool,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub endpoint: Option<Url>,
    pub input_size: u32,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct RecommendationConfig {
    pub path: PathBuf,
    pub sheet: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub ttl: Duration,
}
