pub mod entities;
pub mod knowledge;
pub mod matcher;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use knowledge::AllergenKnowledgeBase;
pub use matcher::AllergenMatcher;
pub use ports::*;
pub use value_objects::*;
