pub mod classifier;
pub mod llm;
pub mod recommendation;
pub mod session;
