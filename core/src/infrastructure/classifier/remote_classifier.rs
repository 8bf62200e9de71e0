use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    domain::{
        common::{ClassifierConfig, entities::app_errors::CoreError},
        screening::{
            entities::ClassificationResult, ports::ImageClassifier, value_objects::UploadedImage,
        },
    },
    infrastructure::classifier::preprocess::prepare_image,
};

/// Queries the exported skin-condition model through its inference server.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    endpoint: Option<Url>,
    input_size: u32,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    image: String,
    mime_type: &'static str,
    width: u32,
    height: u32,
}

/// `labels` is the model vocabulary; `probabilities` is index-aligned.
#[derive(Debug, Deserialize)]
struct InferenceResponse {
    labels: Vec<String>,
    probabilities: Vec<f64>,
}

impl RemoteClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            input_size: config.input_size,
            timeout: config.timeout,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

impl ImageClassifier for RemoteClassifier {
    async fn predict(&self, image: UploadedImage) -> Result<ClassificationResult, CoreError> {
        let endpoint = self.endpoint.as_ref().ok_or_else(|| {
            CoreError::ClassifierUnavailable("no classifier endpoint configured".to_string())
        })?;

        let prepared = prepare_image(&image.data, self.input_size)?;

        let request = InferenceRequest {
            image: general_purpose::STANDARD.encode(&prepared.png),
            mime_type: "image/png",
            width: prepared.width,
            height: prepared.height,
        };

        let response = self
            .client
            .post(endpoint.clone())
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Classifier request failed: {}", e);
                CoreError::ClassifierUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Classifier error: {} - {}", status, error_text);
            return Err(CoreError::ClassifierUnavailable(format!(
                "classifier returned {} - {}",
                status, error_text
            )));
        }

        let inference: InferenceResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse classifier response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse classifier response: {}", e))
        })?;

        ClassificationResult::from_vocabulary(inference.labels, inference.probabilities)
    }
}
