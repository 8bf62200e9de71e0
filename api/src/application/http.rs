pub mod health;
pub mod intake;
pub mod llm;
pub mod screening;
pub mod server;
