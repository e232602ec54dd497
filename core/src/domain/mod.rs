pub mod allergen;
pub mod common;
pub mod food_data;
pub mod journal;
pub mod profile;
pub mod resource;
pub mod settings;
