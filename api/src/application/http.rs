pub mod analyzer;
pub mod dashboard;
pub mod food;
pub mod health;
pub mod journal;
pub mod profile;
pub mod resources;
pub mod server;
pub mod settings;
