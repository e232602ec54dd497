use serde::{Deserialize, Serialize};

use crate::domain::{
    journal::entities::{JournalEntry, default_journal_entries},
    profile::entities::UserProfile,
    resource::entities::{SavedResource, default_resources},
    settings::entities::AppSettings,
};

/// Everything persisted for the single local user, stored as one JSON
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub user_profile: UserProfile,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub saved_resources: Vec<SavedResource>,
    #[serde(default)]
    pub settings: AppSettings,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            user_profile: UserProfile::default(),
            journal_entries: default_journal_entries(),
            saved_resources: default_resources(),
            settings: AppSettings::default(),
        }
    }
}
