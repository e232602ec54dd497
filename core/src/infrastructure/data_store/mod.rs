pub mod app_data;
pub mod repositories;
