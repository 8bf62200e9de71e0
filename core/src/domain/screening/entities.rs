use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, screening::TOP_PREDICTIONS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    pub label: String,
    pub probability: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }

    /// Probability as a two-decimal percentage, e.g. `"60.00%"`.
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }

    /// Progress-bar value in `0..=100`.
    pub fn progress(&self) -> u8 {
        (self.probability * 100.0).clamp(0.0, 100.0) as u8
    }
}

/// Full label -> probability output of the classifier for one image, in
/// model vocabulary order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    predictions: Vec<Prediction>,
}

impl ClassificationResult {
    /// Pairs the vocabulary with the probability vector returned by the model.
    pub fn from_vocabulary(labels: Vec<String>, probabilities: Vec<f64>) -> Result<Self, CoreError> {
        if labels.len() != probabilities.len() {
            return Err(CoreError::ExternalServiceError(format!(
                "classifier returned {} labels but {} probabilities",
                labels.len(),
                probabilities.len()
            )));
        }

        if let Some(bad) = probabilities
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(CoreError::ExternalServiceError(format!(
                "classifier returned probability {bad} outside [0, 1]"
            )));
        }

        let predictions = labels
            .into_iter()
            .zip(probabilities)
            .map(|(label, probability)| Prediction { label, probability })
            .collect();

        Ok(Self { predictions })
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// The `n` most likely labels, descending. The sort is stable, so ties
    /// keep vocabulary order.
    pub fn top(&self, n: usize) -> Vec<Prediction> {
        let mut ranked = self.predictions.clone();
        ranked.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }
}

/// Top predictions for one uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageScreening {
    pub file_name: String,
    pub top_predictions: Vec<Prediction>,
}

impl ImageScreening {
    pub fn new(file_name: impl Into<String>, result: &ClassificationResult) -> Self {
        Self {
            file_name: file_name.into(),
            top_predictions: result.top(TOP_PREDICTIONS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecommendation {
    pub product_image: String,
    pub profit_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionRecommendations {
    pub class: String,
    pub products: Vec<ProductRecommendation>,
}

/// Condition class -> products, read once from the recommendation
/// spreadsheet. Classes keep their order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationTable {
    entries: Vec<ConditionRecommendations>,
}

impl RecommendationTable {
    pub const CLASS_COLUMN: &'static str = "class";
    pub const IMAGE_COLUMN: &'static str = "product_image";
    pub const LINK_COLUMN: &'static str = "profit_link";

    /// Builds the table from a header row and data rows of cell text.
    /// Rows with an empty class are skipped.
    pub fn from_rows(header: &[String], rows: &[Vec<String>]) -> Result<Self, CoreError> {
        let column = |name: &str| {
            header
                .iter()
                .position(|cell| cell.trim() == name)
                .ok_or_else(|| {
                    CoreError::RecommendationsUnavailable(format!("missing column `{name}`"))
                })
        };

        let class_idx = column(Self::CLASS_COLUMN)?;
        let image_idx = column(Self::IMAGE_COLUMN)?;
        let link_idx = column(Self::LINK_COLUMN)?;

        let cell = |row: &Vec<String>, idx: usize| {
            row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
        };

        let mut table = Self::default();
        for row in rows {
            let class = cell(row, class_idx);
            if class.is_empty() {
                continue;
            }

            table.push(
                class,
                ProductRecommendation {
                    product_image: cell(row, image_idx),
                    profit_link: cell(row, link_idx),
                },
            );
        }

        Ok(table)
    }

    fn push(&mut self, class: String, product: ProductRecommendation) {
        match self.entries.iter_mut().find(|entry| entry.class == class) {
            Some(entry) => entry.products.push(product),
            None => self.entries.push(ConditionRecommendations {
                class,
                products: vec![product],
            }),
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.class.clone()).collect()
    }

    pub fn all(&self) -> &[ConditionRecommendations] {
        &self.entries
    }

    /// Exact class match.
    pub fn get(&self, class: &str) -> Option<&ConditionRecommendations> {
        self.entries.iter().find(|entry| entry.class == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_three_descending() {
        let result = ClassificationResult::from_vocabulary(
            labels(&["acne", "redness", "dryness", "other"]),
            vec![0.6, 0.25, 0.1, 0.05],
        )
        .unwrap();

        assert_eq!(
            result.top(TOP_PREDICTIONS),
            vec![
                Prediction::new("acne", 0.6),
                Prediction::new("redness", 0.25),
                Prediction::new("dryness", 0.1),
            ]
        );
    }

    #[test]
    fn test_top_breaks_ties_by_vocabulary_order() {
        let result = ClassificationResult::from_vocabulary(
            labels(&["wrinkles", "acne", "eye bags", "redness"]),
            vec![0.1, 0.3, 0.3, 0.3],
        )
        .unwrap();

        let top: Vec<String> = result.top(3).into_iter().map(|p| p.label).collect();
        assert_eq!(top, labels(&["acne", "eye bags", "redness"]));
    }

    #[test]
    fn test_top_with_small_vocabulary() {
        let result =
            ClassificationResult::from_vocabulary(labels(&["a", "b"]), vec![0.2, 0.8]).unwrap();
        assert_eq!(result.top(3).len(), 2);
        assert_eq!(result.top(3)[0].label, "b");
    }

    #[test]
    fn test_rejects_misaligned_or_invalid_probabilities() {
        assert!(ClassificationResult::from_vocabulary(labels(&["a", "b"]), vec![1.0]).is_err());
        assert!(ClassificationResult::from_vocabulary(labels(&["a"]), vec![1.5]).is_err());
        assert!(ClassificationResult::from_vocabulary(labels(&["a"]), vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_prediction_display_helpers() {
        let prediction = Prediction::new("acne", 0.6);
        assert_eq!(prediction.percentage(), "60.00%");
        assert_eq!(prediction.progress(), 60);

        let tiny = Prediction::new("other", 0.00421);
        assert_eq!(tiny.percentage(), "0.42%");
        assert_eq!(tiny.progress(), 0);
    }

    #[test]
    fn test_recommendation_table_groups_by_class_in_first_seen_order() {
        let header = row(&["class", "product_image", "profit_link"]);
        let rows = vec![
            row(&["Acne", "https://img/1.png", "https://shop/1"]),
            row(&["Redness", "https://img/2.png", "https://shop/2"]),
            row(&["Acne", "https://img/3.png", "https://shop/3"]),
            row(&["", "https://img/4.png", "https://shop/4"]),
        ];

        let table = RecommendationTable::from_rows(&header, &rows).unwrap();

        assert_eq!(table.classes(), labels(&["Acne", "Redness"]));
        let acne = table.get("Acne").unwrap();
        assert_eq!(acne.products.len(), 2);
        assert_eq!(acne.products[1].profit_link, "https://shop/3");
        assert!(table.get("acne").is_none());
    }

    #[test]
    fn test_recommendation_table_columns_can_be_in_any_order() {
        let header = row(&["profit_link", "notes", "class", "product_image"]);
        let rows = vec![row(&["https://shop/1", "x", "Dryness", "https://img/1.png"])];

        let table = RecommendationTable::from_rows(&header, &rows).unwrap();
        let dryness = table.get("Dryness").unwrap();
        assert_eq!(dryness.products[0].product_image, "https://img/1.png");
    }

    #[test]
    fn test_recommendation_table_requires_columns() {
        let header = row(&["class", "product_image"]);
        let err = RecommendationTable::from_rows(&header, &[]).unwrap_err();
        assert_eq!(
            err,
            CoreError::RecommendationsUnavailable("missing column `profit_link`".to_string())
        );
    }
}
