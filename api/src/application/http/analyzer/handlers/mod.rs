pub mod analyze_ingredients;
pub mod analyze_menu;
