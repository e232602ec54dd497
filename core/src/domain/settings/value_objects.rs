use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::settings::entities::{AppSettings, Theme};

/// Settings update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsInput {
    pub notifications: Option<bool>,
    pub emergency_access: Option<bool>,
    pub data_sharing: Option<bool>,
    pub theme: Option<Theme>,
}

impl UpdateSettingsInput {
    pub fn merge_into(self, mut settings: AppSettings) -> AppSettings {
        if let Some(v) = self.notifications {
            settings.notifications = v;
        }
        if let Some(v) = self.emergency_access {
            settings.emergency_access = v;
        }
        if let Some(v) = self.data_sharing {
            settings.data_sharing = v;
        }
        if let Some(v) = self.theme {
            settings.theme = v;
        }
        settings
    }
}
