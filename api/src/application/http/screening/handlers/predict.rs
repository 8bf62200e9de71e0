use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use sfie_core::domain::screening::{entities::ImageScreening, ports::ScreeningService};
use utoipa::ToSchema;

use crate::application::http::{
    screening::upload::read_images,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScreeningPrediction {
    pub label: String,
    pub probability: f64,
    /// Probability as a two-decimal percentage, e.g. `60.00%`.
    pub percentage: String,
    /// Integer progress value in `0..=100`.
    pub progress: u8,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScreenedImage {
    pub file_name: String,
    pub predictions: Vec<ScreeningPrediction>,
}

impl From<&ImageScreening> for ScreenedImage {
    fn from(screening: &ImageScreening) -> Self {
        Self {
            file_name: screening.file_name.clone(),
            predictions: screening
                .top_predictions
                .iter()
                .map(|p| ScreeningPrediction {
                    label: p.label.clone(),
                    probability: p.probability,
                    percentage: p.percentage(),
                    progress: p.progress(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictResponse {
    pub data: Vec<ScreenedImage>,
}

#[utoipa::path(
    post,
    path = "/predict",
    tag = "screening",
    summary = "Screen face images",
    description = "Classifies one or more uploaded images (multipart `image` parts, jpg/jpeg/png) and returns the three most likely skin conditions for each.",
    responses(
        (status = 200, body = PredictResponse),
        (status = 400, description = "No image or unsupported file type"),
        (status = 503, description = "Classifier unavailable"),
    ),
)]
pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<PredictResponse>, ApiError> {
    let images = read_images(multipart).await?;

    let screenings = state
        .service
        .screen_images(images)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PredictResponse {
        data: screenings.iter().map(ScreenedImage::from).collect(),
    }))
}
