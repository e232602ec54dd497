use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Emergency,
    Restaurant,
    Travel,
    Education,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Emergency => "emergency",
            ResourceType::Restaurant => "restaurant",
            ResourceType::Travel => "travel",
            ResourceType::Education => "education",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emergency" => Ok(ResourceType::Emergency),
            "restaurant" => Ok(ResourceType::Restaurant),
            "travel" => Ok(ResourceType::Travel),
            "education" => Ok(ResourceType::Education),
            other => Err(CoreError::InvalidInput(format!(
                "unknown resource type '{other}'"
            ))),
        }
    }
}

/// A printable document the user keeps offline (action plan, chef cards...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_downloaded: Option<DateTime<Utc>>,
}

impl SavedResource {
    fn new(resource_type: ResourceType, name: &str) -> Self {
        Self {
            resource_type,
            name: name.to_string(),
            downloaded: None,
            accessed: None,
            last_downloaded: None,
        }
    }
}

pub fn default_resources() -> Vec<SavedResource> {
    vec![
        SavedResource {
            downloaded: Some(false),
            ..SavedResource::new(ResourceType::Emergency, "Emergency Action Plan")
        },
        SavedResource {
            downloaded: Some(false),
            ..SavedResource::new(ResourceType::Restaurant, "Restaurant Chef Cards")
        },
        SavedResource {
            downloaded: Some(false),
            ..SavedResource::new(ResourceType::Travel, "Travel Guide")
        },
        SavedResource {
            accessed: Some(false),
            ..SavedResource::new(ResourceType::Education, "Allergy Education")
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_serializes_type_key() {
        let json = serde_json::to_value(&default_resources()[3]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "education",
                "name": "Allergy Education",
                "accessed": false
            })
        );
    }

    #[test]
    fn test_resource_type_from_str() {
        assert_eq!(
            "Travel".parse::<ResourceType>().unwrap(),
            ResourceType::Travel
        );
        assert!("pdf".parse::<ResourceType>().is_err());
    }
}
