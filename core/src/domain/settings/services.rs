use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    journal::ports::JournalRepository,
    profile::ports::ProfileRepository,
    resource::ports::ResourceRepository,
    settings::{
        entities::AppSettings,
        ports::{SettingsRepository, SettingsService},
        value_objects::UpdateSettingsInput,
    },
};

impl<P, J, RS, ST> SettingsService for Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    async fn get_settings(&self) -> Result<AppSettings, CoreError> {
        self.settings_repository.get_settings().await
    }

    async fn update_settings(&self, input: UpdateSettingsInput) -> Result<AppSettings, CoreError> {
        let current = self.settings_repository.get_settings().await?;
        let settings = input.merge_into(current);
        debug!("Saving settings: {:?}", settings);

        self.settings_repository.save_settings(settings).await
    }
}
