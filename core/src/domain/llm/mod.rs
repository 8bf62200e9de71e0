pub mod keyword_gate;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use keyword_gate::is_in_scope;
pub use ports::*;
pub use value_objects::*;
