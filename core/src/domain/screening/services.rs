use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    intake::ports::SessionRepository,
    llm::ports::LLMClient,
    screening::{
        entities::{ConditionRecommendations, ImageScreening},
        ports::{ImageClassifier, RecommendationRepository, ScreeningService},
        value_objects::UploadedImage,
    },
};

impl<L, C, RR, S> Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    /// Validates every upload before running inference so a bad file fails
    /// the whole batch up front. Images are classified one after another.
    pub(crate) async fn classify_all(
        &self,
        images: Vec<UploadedImage>,
    ) -> Result<Vec<ImageScreening>, CoreError> {
        if images.is_empty() {
            return Err(CoreError::UnsupportedImage(
                "no image was uploaded".to_string(),
            ));
        }

        for image in &images {
            image.ensure_supported()?;
        }

        let mut screenings = Vec::with_capacity(images.len());
        for image in images {
            let file_name = image.file_name.clone();
            let result = self.classifier.predict(image).await?;
            let screening = ImageScreening::new(file_name, &result);

            tracing::debug!(
                file_name = %screening.file_name,
                top = ?screening.top_predictions.first().map(|p| &p.label),
                "image classified"
            );
            screenings.push(screening);
        }

        Ok(screenings)
    }
}

impl<L, C, RR, S> ScreeningService for Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    async fn screen_images(
        &self,
        images: Vec<UploadedImage>,
    ) -> Result<Vec<ImageScreening>, CoreError> {
        self.classify_all(images).await
    }

    fn list_recommendations(&self) -> Result<Vec<ConditionRecommendations>, CoreError> {
        self.recommendation_repository.list()
    }

    fn get_recommendations(&self, class: &str) -> Result<ConditionRecommendations, CoreError> {
        self.recommendation_repository
            .get_by_class(class)?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{StubLLMClient, test_service},
        llm::value_objects::RequestOptions,
        screening::{entities::ProductRecommendation, ports::MockRecommendationRepository},
    };
    use bytes::Bytes;

    fn acne_recommendations() -> ConditionRecommendations {
        ConditionRecommendations {
            class: "acne".to_string(),
            products: vec![ProductRecommendation {
                product_image: "https://cdn.example.com/gel.png".to_string(),
                profit_link: "https://shop.example.com/gel".to_string(),
            }],
        }
    }

    fn image(name: &str) -> UploadedImage {
        UploadedImage::new(name, Bytes::from_static(b"image bytes"))
    }

    #[tokio::test]
    async fn test_screen_images_returns_top_three_per_image() {
        let service = test_service(
            StubLLMClient::new(""),
            MockRecommendationRepository::new(),
            RequestOptions::default(),
        );

        let screenings = service
            .screen_images(vec![image("left.jpg"), image("right.png")])
            .await
            .unwrap();

        assert_eq!(screenings.len(), 2);
        assert_eq!(screenings[0].file_name, "left.jpg");
        assert_eq!(screenings[1].file_name, "right.png");
        assert_eq!(screenings[0].top_predictions.len(), 3);
        assert_eq!(screenings[0].top_predictions[0].label, "acne");
        assert_eq!(screenings[0].top_predictions[0].percentage(), "60.00%");
    }

    #[tokio::test]
    async fn test_screen_images_rejects_batch_with_unsupported_file() {
        let service = test_service(
            StubLLMClient::new(""),
            MockRecommendationRepository::new(),
            RequestOptions::default(),
        );

        let result = service
            .screen_images(vec![image("left.jpg"), image("notes.txt")])
            .await;

        assert!(matches!(result, Err(CoreError::UnsupportedImage(_))));
        assert!(matches!(
            service.screen_images(Vec::new()).await,
            Err(CoreError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_get_recommendations_by_class() {
        let mut repository = MockRecommendationRepository::new();
        repository
            .expect_get_by_class()
            .times(2)
            .returning(|class| Ok((class == "acne").then(acne_recommendations)));

        let service = test_service(StubLLMClient::new(""), repository, RequestOptions::default());

        assert_eq!(
            service.get_recommendations("acne"),
            Ok(acne_recommendations())
        );
        assert_eq!(
            service.get_recommendations("melasma"),
            Err(CoreError::NotFound)
        );
    }

    #[test]
    fn test_list_recommendations_surfaces_unreadable_table() {
        let mut repository = MockRecommendationRepository::new();
        repository.expect_list().returning(|| {
            Err(CoreError::RecommendationsUnavailable(
                "recommendation.xlsx not found".to_string(),
            ))
        });

        let service = test_service(StubLLMClient::new(""), repository, RequestOptions::default());

        assert!(matches!(
            service.list_recommendations(),
            Err(CoreError::RecommendationsUnavailable(_))
        ));
    }
}
