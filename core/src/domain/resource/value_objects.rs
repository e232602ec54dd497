use chrono::{DateTime, Utc};

use crate::domain::resource::entities::SavedResource;

/// Partial update; only the fields that are `Some` overwrite the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceUpdate {
    pub name: Option<String>,
    pub downloaded: Option<bool>,
    pub accessed: Option<bool>,
    pub last_downloaded: Option<DateTime<Utc>>,
}

impl ResourceUpdate {
    pub fn downloaded_at(at: DateTime<Utc>) -> Self {
        Self {
            downloaded: Some(true),
            last_downloaded: Some(at),
            ..Self::default()
        }
    }

    pub fn apply(self, resource: &mut SavedResource) {
        if let Some(name) = self.name {
            resource.name = name;
        }
        if let Some(downloaded) = self.downloaded {
            resource.downloaded = Some(downloaded);
        }
        if let Some(accessed) = self.accessed {
            resource.accessed = Some(accessed);
        }
        if let Some(at) = self.last_downloaded {
            resource.last_downloaded = Some(at);
        }
    }
}
