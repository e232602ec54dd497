use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub notifications: bool,
    pub emergency_access: bool,
    pub data_sharing: bool,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            emergency_access: true,
            data_sharing: false,
            theme: Theme::Light,
        }
    }
}
