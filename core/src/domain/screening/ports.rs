use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    screening::{
        entities::{ClassificationResult, ConditionRecommendations, ImageScreening},
        value_objects::UploadedImage,
    },
};

/// Adapter over the pre-trained classification artifact. Holds no state
/// between calls.
#[cfg_attr(test, mockall::automock)]
pub trait ImageClassifier: Send + Sync {
    fn predict(
        &self,
        image: UploadedImage,
    ) -> impl Future<Output = Result<ClassificationResult, CoreError>> + Send;
}

/// Read-only access to the recommendation spreadsheet.
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationRepository: Send + Sync {
    fn list(&self) -> Result<Vec<ConditionRecommendations>, CoreError>;

    fn get_by_class(&self, class: &str) -> Result<Option<ConditionRecommendations>, CoreError>;
}

pub trait ScreeningService: Send + Sync {
    fn screen_images(
        &self,
        images: Vec<UploadedImage>,
    ) -> impl Future<Output = Result<Vec<ImageScreening>, CoreError>> + Send;

    fn list_recommendations(&self) -> Result<Vec<ConditionRecommendations>, CoreError>;

    fn get_recommendations(&self, class: &str) -> Result<ConditionRecommendations, CoreError>;
}
