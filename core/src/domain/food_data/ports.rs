use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_data::{
        entities::Recipe,
        value_objects::{FindRecipesInput, FindSubstitutesInput, SubstituteSuggestions},
    },
};

/// Food lookups filtered by the allergies on the stored profile.
pub trait FoodDataService: Send + Sync {
    fn find_substitutes(
        &self,
        input: FindSubstitutesInput,
    ) -> impl Future<Output = Result<SubstituteSuggestions, CoreError>> + Send;

    fn find_safe_recipes(
        &self,
        input: FindRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
