use tracing::{info, warn};

use crate::domain::{
    allergen::entities::AllergenProfileEntry,
    common::{entities::app_errors::CoreError, services::Service},
    journal::ports::JournalRepository,
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
        value_objects::{AddAllergenInput, UpdateAllergenInput},
    },
    resource::ports::ResourceRepository,
    settings::ports::SettingsRepository,
};

impl<P, J, RS, ST> ProfileService for Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        self.profile_repository.get_profile().await
    }

    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        if profile.name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "profile name must not be empty".to_string(),
            ));
        }
        for allergen in &profile.allergies {
            allergen.validate()?;
        }

        self.profile_repository.save_profile(profile).await
    }

    async fn get_allergens(&self) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        self.profile_repository.get_allergens().await
    }

    async fn add_allergen(
        &self,
        input: AddAllergenInput,
    ) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        let entry = AllergenProfileEntry::from(input);
        entry.validate()?;
        self.warn_if_unknown(&entry);

        let allergens = self.profile_repository.add_allergen(entry).await?;
        info!("Allergen added, profile now lists {}", allergens.len());

        Ok(allergens)
    }

    async fn update_allergen(
        &self,
        input: UpdateAllergenInput,
    ) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        let index = input.index;
        let entry = AllergenProfileEntry::from(input);
        entry.validate()?;
        self.warn_if_unknown(&entry);

        self.profile_repository.update_allergen(index, entry).await
    }

    async fn remove_allergen(&self, index: usize) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        self.profile_repository.remove_allergen(index).await
    }
}

impl<P, J, RS, ST> Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    fn warn_if_unknown(&self, entry: &AllergenProfileEntry) {
        if !self.matcher.knowledge().contains(&entry.name) {
            warn!(
                "Allergen '{}' has no knowledge entry and will not be detected by the analyzer",
                entry.name
            );
        }
    }
}
