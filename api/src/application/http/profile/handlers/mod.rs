pub mod add_allergen;
pub mod get_allergens;
pub mod get_profile;
pub mod remove_allergen;
pub mod update_allergen;
pub mod update_profile;
