use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    settings::{entities::AppSettings, value_objects::UpdateSettingsInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    fn get_settings(&self) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;

    fn save_settings(
        &self,
        settings: AppSettings,
    ) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;
}

pub trait SettingsService: Send + Sync {
    fn get_settings(&self) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;

    fn update_settings(
        &self,
        input: UpdateSettingsInput,
    ) -> impl Future<Output = Result<AppSettings, CoreError>> + Send;
}
