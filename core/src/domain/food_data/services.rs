use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_data::{
        entities::Recipe,
        helpers::{filter_safe_recipes, find_substitutes},
        ports::FoodDataService,
        value_objects::{FindRecipesInput, FindSubstitutesInput, SubstituteSuggestions},
    },
    journal::ports::JournalRepository,
    profile::ports::ProfileRepository,
    resource::ports::ResourceRepository,
    settings::ports::SettingsRepository,
};

impl<P, J, RS, ST> FoodDataService for Service<P, J, RS, ST>
where
    P: ProfileRepository,
    J: JournalRepository,
    RS: ResourceRepository,
    ST: SettingsRepository,
{
    async fn find_substitutes(
        &self,
        input: FindSubstitutesInput,
    ) -> Result<SubstituteSuggestions, CoreError> {
        let ingredient = input.ingredient.trim();
        if ingredient.is_empty() {
            return Err(CoreError::InvalidInput(
                "ingredient must not be empty".to_string(),
            ));
        }

        let allergies = self.profile_repository.get_allergens().await?;
        let substitutes = find_substitutes(self.matcher.knowledge(), ingredient, &allergies);

        Ok(SubstituteSuggestions {
            ingredient: ingredient.to_string(),
            substitutes,
        })
    }

    async fn find_safe_recipes(&self, input: FindRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        let allergies = self.profile_repository.get_allergens().await?;
        let recipes = filter_safe_recipes(&self.recipes, &input.query, &allergies);

        debug!(
            "{} of {} recipes are safe for query '{}'",
            recipes.len(),
            self.recipes.len(),
            input.query
        );

        Ok(recipes)
    }
}
