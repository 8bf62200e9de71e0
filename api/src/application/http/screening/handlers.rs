pub mod get_recommendations;
pub mod list_recommendations;
pub mod predict;
