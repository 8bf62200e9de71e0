pub mod spreadsheet_repository;

pub use spreadsheet_repository::SpreadsheetRecommendationRepository;
