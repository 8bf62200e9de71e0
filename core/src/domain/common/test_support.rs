use std::{sync::Mutex, time::Duration};

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, services::Service},
        llm::{ports::LLMClient, value_objects::RequestOptions},
        screening::{
            entities::ClassificationResult, ports::ImageClassifier,
            ports::MockRecommendationRepository, value_objects::UploadedImage,
        },
    },
    infrastructure::session::InMemorySessionRepository,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub api_key: String,
    pub options: RequestOptions,
}

/// Answers every prompt with a fixed text and remembers what it was sent.
pub struct StubLLMClient {
    pub response: String,
    pub delay: Duration,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl StubLLMClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Waits `delay` before answering.
    pub fn slow(response: &str, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new(response)
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl LLMClient for StubLLMClient {
    async fn get_response(
        &self,
        prompt: String,
        api_key: String,
        options: RequestOptions,
    ) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt,
            api_key,
            options,
        });
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.response.clone())
    }
}

/// Returns the same distribution for every image.
pub struct StubClassifier {
    pub labels: Vec<String>,
    pub probabilities: Vec<f64>,
}

impl StubClassifier {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            labels: pairs.iter().map(|(l, _)| l.to_string()).collect(),
            probabilities: pairs.iter().map(|(_, p)| *p).collect(),
        }
    }
}

impl ImageClassifier for StubClassifier {
    async fn predict(&self, _image: UploadedImage) -> Result<ClassificationResult, CoreError> {
        ClassificationResult::from_vocabulary(self.labels.clone(), self.probabilities.clone())
    }
}

pub type TestService =
    Service<StubLLMClient, StubClassifier, MockRecommendationRepository, InMemorySessionRepository>;

pub fn test_service(
    llm: StubLLMClient,
    recommendations: MockRecommendationRepository,
    options: RequestOptions,
) -> TestService {
    Service::new(
        llm,
        StubClassifier::new(&[
            ("acne", 0.6),
            ("redness", 0.25),
            ("dryness", 0.1),
            ("other", 0.05),
        ]),
        recommendations,
        InMemorySessionRepository::new(Duration::from_secs(600)),
        options,
    )
}
