use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub measure: String,
}

impl RecipeIngredient {
    fn new(name: &str, measure: &str) -> Self {
        Self {
            name: name.to_string(),
            measure: measure.to_string(),
        }
    }
}

/// Offline recipe catalogue served by the recipe search.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Simple Veggie Stir Fry".to_string(),
            category: "Vegetarian".to_string(),
            area: "Asian".to_string(),
            instructions: "1. Chop all vegetables. 2. Heat oil in pan. 3. Stir fry vegetables. 4. Add sauce and serve.".to_string(),
            tags: vec!["Quick".to_string(), "Vegan".to_string()],
            ingredients: vec![
                RecipeIngredient::new("Broccoli", "1 cup"),
                RecipeIngredient::new("Carrots", "2 medium"),
                RecipeIngredient::new("Bell Peppers", "1 large"),
                RecipeIngredient::new("Soy Sauce", "2 tbsp"),
                RecipeIngredient::new("Rice", "1 cup"),
            ],
        },
        Recipe {
            id: 2,
            name: "Basic Rice Bowl".to_string(),
            category: "Vegetarian".to_string(),
            area: "Asian".to_string(),
            instructions: "1. Cook rice. 2. Prepare tofu and vegetables. 3. Assemble in bowl. 4. Add sauce on top.".to_string(),
            tags: vec!["Bowl".to_string()],
            ingredients: vec![
                RecipeIngredient::new("Rice", "1 cup"),
                RecipeIngredient::new("Tofu", "200g"),
                RecipeIngredient::new("Avocado", "1"),
                RecipeIngredient::new("Cucumber", "1"),
                RecipeIngredient::new("Carrots", "1"),
            ],
        },
        Recipe {
            id: 3,
            name: "Fruit Salad".to_string(),
            category: "Dessert".to_string(),
            area: "International".to_string(),
            instructions: "1. Wash and cut all fruits. 2. Mix together. 3. Add honey if desired."
                .to_string(),
            tags: vec!["Fruit".to_string(), "NoCook".to_string()],
            ingredients: vec![
                RecipeIngredient::new("Apple", "1"),
                RecipeIngredient::new("Banana", "1"),
                RecipeIngredient::new("Strawberries", "10"),
                RecipeIngredient::new("Honey", "1 tbsp"),
            ],
        },
    ]
}
