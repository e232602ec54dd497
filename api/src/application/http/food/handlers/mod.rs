pub mod get_recipes;
pub mod get_substitutes;
