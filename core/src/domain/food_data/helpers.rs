use crate::domain::{
    allergen::{entities::AllergenProfileEntry, knowledge::AllergenKnowledgeBase},
    food_data::entities::Recipe,
};

const GENERIC_SUBSTITUTES: [&str; 3] = ["Substitute 1", "Substitute 2", "Substitute 3"];

/// Known substitutes for `ingredient`, minus any that mention one of the
/// user's allergies. Unknown ingredients get generic placeholders.
pub fn find_substitutes(
    knowledge: &AllergenKnowledgeBase,
    ingredient: &str,
    allergies: &[AllergenProfileEntry],
) -> Vec<String> {
    let Some(candidates) = knowledge.ingredient_substitutes(ingredient) else {
        return GENERIC_SUBSTITUTES.iter().map(|s| s.to_string()).collect();
    };

    let allergy_names: Vec<String> = allergies
        .iter()
        .map(|a| a.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    candidates
        .iter()
        .filter(|candidate| {
            let candidate = candidate.to_lowercase();
            !allergy_names.iter().any(|name| candidate.contains(name))
        })
        .cloned()
        .collect()
}

pub fn recipe_contains_allergen(recipe: &Recipe, allergen: &str) -> bool {
    let allergen = allergen.trim().to_lowercase();
    if allergen.is_empty() {
        return false;
    }

    recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.name.to_lowercase().contains(&allergen))
        || recipe.instructions.to_lowercase().contains(&allergen)
        || recipe.name.to_lowercase().contains(&allergen)
}

fn recipe_matches_query(recipe: &Recipe, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    [&recipe.name, &recipe.category, &recipe.area]
        .into_iter()
        .chain(recipe.tags.iter())
        .chain(recipe.ingredients.iter().map(|i| &i.name))
        .any(|field| field.to_lowercase().contains(&query))
}

/// Recipes matching `query` that contain none of `allergies`.
pub fn filter_safe_recipes(
    recipes: &[Recipe],
    query: &str,
    allergies: &[AllergenProfileEntry],
) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe_matches_query(recipe, query))
        .filter(|recipe| {
            !allergies
                .iter()
                .any(|allergy| recipe_contains_allergen(recipe, &allergy.name))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{allergen::entities::Severity, food_data::entities::builtin_recipes};

    fn allergies(names: &[&str]) -> Vec<AllergenProfileEntry> {
        names
            .iter()
            .map(|n| AllergenProfileEntry::new(*n, Severity::Mild))
            .collect()
    }

    #[test]
    fn test_substitutes_drop_allergy_mentions() {
        let knowledge = AllergenKnowledgeBase::builtin().unwrap();

        let subs = find_substitutes(&knowledge, "Peanut Butter", &allergies(&["almond"]));
        assert_eq!(
            subs,
            vec!["sunflower seed butter", "cashew butter", "tahini"]
        );

        let subs = find_substitutes(&knowledge, "soy sauce", &allergies(&["Gluten"]));
        assert_eq!(
            subs,
            vec!["coconut aminos", "liquid aminos", "fish sauce"]
        );
    }

    #[test]
    fn test_unknown_ingredient_gets_placeholders() {
        let knowledge = AllergenKnowledgeBase::builtin().unwrap();
        let subs = find_substitutes(&knowledge, "saffron", &[]);
        assert_eq!(subs, vec!["Substitute 1", "Substitute 2", "Substitute 3"]);
    }

    #[test]
    fn test_recipe_contains_allergen_checks_name_instructions_ingredients() {
        let recipes = builtin_recipes();
        assert!(recipe_contains_allergen(&recipes[0], "soy"));
        assert!(recipe_contains_allergen(&recipes[2], "HONEY"));
        assert!(recipe_contains_allergen(&recipes[1], "bowl"));
        assert!(!recipe_contains_allergen(&recipes[2], "peanut"));
        assert!(!recipe_contains_allergen(&recipes[2], "  "));
    }

    #[test]
    fn test_filter_safe_recipes() {
        let recipes = builtin_recipes();

        let all: Vec<u32> = filter_safe_recipes(&recipes, "", &[])
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(all, vec![1, 2, 3]);

        let safe: Vec<u32> = filter_safe_recipes(&recipes, "asian", &allergies(&["Soy"]))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(safe, vec![2]);

        assert!(filter_safe_recipes(&recipes, "rice", &allergies(&["Rice"])).is_empty());
    }
}
