use std::path::Path;

use calamine::{Reader, open_workbook_auto};

use crate::domain::{
    common::{RecommendationConfig, entities::app_errors::CoreError},
    screening::{
        entities::{ConditionRecommendations, RecommendationTable},
        ports::RecommendationRepository,
    },
};

/// Recommendation table loaded once from a spreadsheet (`class`,
/// `product_image`, `profit_link` columns). A table that failed to load is
/// kept as its error so lookups report it instead of the process exiting.
#[derive(Debug, Clone)]
pub struct SpreadsheetRecommendationRepository {
    table: Result<RecommendationTable, CoreError>,
}

impl SpreadsheetRecommendationRepository {
    pub fn load(config: &RecommendationConfig) -> Self {
        let table = read_table(&config.path, config.sheet.as_deref());

        match &table {
            Ok(table) => tracing::info!(
                path = %config.path.display(),
                classes = table.classes().len(),
                "recommendation table loaded"
            ),
            Err(e) => tracing::error!(
                path = %config.path.display(),
                "failed to load recommendation table: {}",
                e
            ),
        }

        Self { table }
    }

    pub fn from_table(table: RecommendationTable) -> Self {
        Self { table: Ok(table) }
    }

    fn table(&self) -> Result<&RecommendationTable, CoreError> {
        self.table.as_ref().map_err(Clone::clone)
    }
}

fn read_table(path: &Path, sheet: Option<&str>) -> Result<RecommendationTable, CoreError> {
    let unavailable = |e: calamine::Error| CoreError::RecommendationsUnavailable(e.to_string());

    let mut workbook = open_workbook_auto(path).map_err(unavailable)?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name).map_err(unavailable)?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                CoreError::RecommendationsUnavailable("workbook has no sheets".to_string())
            })?
            .map_err(unavailable)?,
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());

    let header = rows.next().ok_or_else(|| {
        CoreError::RecommendationsUnavailable("recommendation sheet is empty".to_string())
    })?;
    let rows: Vec<Vec<String>> = rows.collect();

    RecommendationTable::from_rows(&header, &rows)
}

impl RecommendationRepository for SpreadsheetRecommendationRepository {
    fn list(&self) -> Result<Vec<ConditionRecommendations>, CoreError> {
        Ok(self.table()?.all().to_vec())
    }

    fn get_by_class(&self, class: &str) -> Result<Option<ConditionRecommendations>, CoreError> {
        Ok(self.table()?.get(class).cloned())
    }
}
