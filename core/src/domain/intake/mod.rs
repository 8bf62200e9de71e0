pub mod entities;
pub mod ports;
pub mod prompt;
pub mod questionnaire;
pub mod services;
pub mod value_objects;
pub mod wizard;

pub use entities::*;
pub use ports::*;
pub use prompt::build_prompt;
pub use value_objects::*;
