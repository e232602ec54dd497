use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubstituteSuggestions {
    pub ingredient: String,
    pub substitutes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FindSubstitutesInput {
    pub ingredient: String,
}

#[derive(Debug, Clone, Default)]
pub struct FindRecipesInput {
    /// Empty matches every recipe.
    pub query: String,
}
