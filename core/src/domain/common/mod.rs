use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AllergyCompassConfig {
    pub storage: StorageConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// JSON document holding profile, journal, resources and settings.
    pub data_path: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct KnowledgeConfig {
    /// Overrides the embedded allergen knowledge table when set.
    pub path: Option<PathBuf>,
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    generate_timestamp().date_naive()
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::UnparsableDate(value.to_string()))
}
