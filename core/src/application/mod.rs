use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        allergen::{knowledge::AllergenKnowledgeBase, matcher::AllergenMatcher},
        common::{AllergyCompassConfig, entities::app_errors::CoreError, services::Service},
        food_data::entities::builtin_recipes,
    },
    infrastructure::data_store::repositories::JsonFileDataStore,
};

pub type AllergyCompassService =
    Service<JsonFileDataStore, JsonFileDataStore, JsonFileDataStore, JsonFileDataStore>;

/// Wires the JSON data store and the allergen knowledge into a [`Service`].
pub async fn create_service(config: AllergyCompassConfig) -> Result<AllergyCompassService, CoreError> {
    let knowledge = match &config.knowledge.path {
        Some(path) => AllergenKnowledgeBase::from_path(path)?,
        None => AllergenKnowledgeBase::builtin()?,
    };
    info!("Allergen knowledge loaded: {} allergens", knowledge.len());

    let store = JsonFileDataStore::new(config.storage.data_path);
    store.init().await?;
    info!("Data store ready at {}", store.path().display());

    Ok(Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        AllergenMatcher::new(Arc::new(knowledge)),
        builtin_recipes(),
    ))
}
