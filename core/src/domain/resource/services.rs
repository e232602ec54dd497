use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    journal::ports::JournalRepository,
    profile::ports::ProfileRepository,
    resource::{
        entities::{ResourceType, SavedResource},
        ports::{ResourceRepository, ResourceService},
        value_objects::ResourceUpdate,
    },
    settings::ports::SettingsRepository,
};

impl<P, J, RS, ST> ResourceService for Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    async fn get_resources(&self) -> Result<Vec<SavedResource>, CoreError> {
        self.resource_repository.get_resources().await
    }

    async fn mark_resource_downloaded(
        &self,
        resource_type: ResourceType,
        at: DateTime<Utc>,
    ) -> Result<SavedResource, CoreError> {
        let resources = self.resource_repository.get_resources().await?;
        let index = resources
            .iter()
            .position(|r| r.resource_type == resource_type)
            .ok_or(CoreError::NotFound)?;

        let resource = self
            .resource_repository
            .update_resource(index, ResourceUpdate::downloaded_at(at))
            .await?;
        info!("Resource '{}' marked as downloaded", resource.name);

        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tests::test_service;

    #[tokio::test]
    async fn test_mark_resource_downloaded() {
        let (_dir, service) = test_service().await;
        let at = DateTime::parse_from_rfc3339("2025-03-29T08:15:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let resource = service
            .mark_resource_downloaded(ResourceType::Travel, at)
            .await
            .unwrap();
        assert_eq!(resource.name, "Travel Guide");
        assert_eq!(resource.downloaded, Some(true));

        let resources = service.get_resources().await.unwrap();
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[2].last_downloaded, Some(at));
        assert_eq!(resources[0].downloaded, Some(false));
    }

    #[tokio::test]
    async fn test_missing_resource_type_is_not_found() {
        let (_dir, service) = test_service().await;
        service
            .resource_repository
            .save_resources(Vec::new())
            .await
            .unwrap();

        let err = service
            .mark_resource_downloaded(ResourceType::Emergency, Utc::now())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }
}
