use std::sync::Arc;

use crate::domain::{
    allergen::matcher::AllergenMatcher,
    food_data::entities::Recipe,
    journal::ports::JournalRepository,
    profile::ports::ProfileRepository,
    resource::ports::ResourceRepository,
    settings::ports::SettingsRepository,
};

/// Application service. Each domain implements its `*Service` trait on it.
#[derive(Clone)]
pub struct Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    pub(crate) profile_repository: P,
    pub(crate) journal_repository: J,
    pub(crate) resource_repository: RS,
    pub(crate) settings_repository: ST,
    pub(crate) matcher: AllergenMatcher,
    pub(crate) recipes: Arc<Vec<Recipe>>,
}

impl<P, J, RS, ST> Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    pub fn new(
        profile_repository: P,
        journal_repository: J,
        resource_repository: RS,
        settings_repository: ST,
        matcher: AllergenMatcher,
        recipes: Vec<Recipe>,
    ) -> Self {
        Self {
            profile_repository,
            journal_repository,
            resource_repository,
            settings_repository,
            matcher,
            recipes: Arc::new(recipes),
        }
    }

    pub fn matcher(&self) -> &AllergenMatcher {
        &self.matcher
    }
}
