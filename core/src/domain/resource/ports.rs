use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    resource::{
        entities::{ResourceType, SavedResource},
        value_objects::ResourceUpdate,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ResourceRepository: Send + Sync {
    fn get_resources(&self) -> impl Future<Output = Result<Vec<SavedResource>, CoreError>> + Send;

    fn save_resources(
        &self,
        resources: Vec<SavedResource>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Shallow-merges `update` into the resource at `index`; `NotFound` when
    /// out of range.
    fn update_resource(
        &self,
        index: usize,
        update: ResourceUpdate,
    ) -> impl Future<Output = Result<SavedResource, CoreError>> + Send;
}

pub trait ResourceService: Send + Sync {
    fn get_resources(&self) -> impl Future<Output = Result<Vec<SavedResource>, CoreError>> + Send;

    /// Flags the first resource of `resource_type` as downloaded at `at`.
    fn mark_resource_downloaded(
        &self,
        resource_type: ResourceType,
        at: DateTime<Utc>,
    ) -> impl Future<Output = Result<SavedResource, CoreError>> + Send;
}
