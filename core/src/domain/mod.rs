pub mod common;
pub mod intake;
pub mod llm;
pub mod screening;
