use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    allergen::{
        entities::AllergenProfileEntry,
        knowledge::AllergenKnowledgeBase,
        value_objects::{
            AlternativeSuggestion, AnalysisResult, DetectedAllergen, HiddenIngredient,
            MenuAnalysisResult, MenuRule, RiskyItem,
        },
    },
    common::entities::app_errors::CoreError,
};

pub const MENU_RULES: &[MenuRule] = &[
    MenuRule {
        menu_keyword: "caesar salad",
        required_allergen: "dairy",
        dish_label: "Caesar Salad",
    },
    MenuRule {
        menu_keyword: "caesar salad",
        required_allergen: "eggs",
        dish_label: "Caesar Salad",
    },
    MenuRule {
        menu_keyword: "bread",
        required_allergen: "gluten",
        dish_label: "Any dishes with bread",
    },
    MenuRule {
        menu_keyword: "shrimp",
        required_allergen: "shellfish",
        dish_label: "Shrimp Scampi",
    },
];

pub const MENU_SAFE_OPTIONS: [&str; 3] = [
    "Grilled Chicken (no sauce)",
    "Garden Salad (oil and vinegar dressing)",
    "Steamed Vegetables",
];

pub const MENU_SERVER_QUESTIONS: [&str; 2] = [
    "Is there cross-contamination in the kitchen?",
    "Are any marinades used that might contain allergens?",
];

/// Scans ingredient lists and menus for the allergens in a user's profile.
///
/// Matching is a case-insensitive substring search against the canonical
/// allergen name and each of its aliases. Profile entries that the knowledge
/// base does not know about are ignored.
#[derive(Debug, Clone)]
pub struct AllergenMatcher {
    knowledge: Arc<AllergenKnowledgeBase>,
}

impl AllergenMatcher {
    pub fn new(knowledge: Arc<AllergenKnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &AllergenKnowledgeBase {
        &self.knowledge
    }

    pub fn analyze_text(
        &self,
        text: &str,
        profile: &[AllergenProfileEntry],
    ) -> Result<AnalysisResult, CoreError> {
        validate_profile(profile)?;

        let haystack = text.to_lowercase();
        let mut result = AnalysisResult::default();

        for entry in profile {
            let Some(info) = self.knowledge.lookup(&entry.name) else {
                debug!("No knowledge for allergen '{}', skipping", entry.name);
                continue;
            };

            let canonical = entry.name.trim().to_lowercase();
            if let Some(line_number) = line_of(&haystack, &canonical) {
                result.detected_allergens.push(DetectedAllergen {
                    name: entry.name.clone(),
                    found_as: canonical.clone(),
                    severity: entry.severity,
                    line_number,
                });
            }

            // Aliases are reported as hidden ingredients even when they are
            // the primary label on the package.
            for alias in &info.aliases {
                if let Some(line_number) = line_of(&haystack, &alias.to_lowercase()) {
                    result.detected_allergens.push(DetectedAllergen {
                        name: entry.name.clone(),
                        found_as: alias.clone(),
                        severity: entry.severity,
                        line_number,
                    });
                    result.hidden_ingredients.push(HiddenIngredient {
                        name: alias.clone(),
                        contains: entry.name.clone(),
                    });
                }
            }

            if result
                .detected_allergens
                .iter()
                .any(|detected| detected.name == entry.name)
            {
                result.alternatives.push(AlternativeSuggestion {
                    original: entry.name.clone(),
                    alternatives: self.knowledge.alternatives_for(&canonical),
                });
            }
        }

        result.safe = result.detected_allergens.is_empty();

        debug!(
            "Ingredient analysis finished: {} detections, {} hidden",
            result.detected_allergens.len(),
            result.hidden_ingredients.len()
        );

        Ok(result)
    }

    /// Keyword-driven menu check; see [`MENU_RULES`].
    pub fn analyze_menu(
        &self,
        text: &str,
        profile: &[AllergenProfileEntry],
    ) -> Result<MenuAnalysisResult, CoreError> {
        validate_profile(profile)?;

        let haystack = text.to_lowercase();
        let mut risky_items = Vec::new();

        for entry in profile {
            if !self.knowledge.contains(&entry.name) {
                continue;
            }

            let allergen = entry.name.trim().to_lowercase();
            for rule in MENU_RULES {
                if allergen == rule.required_allergen && haystack.contains(rule.menu_keyword) {
                    risky_items.push(RiskyItem {
                        name: rule.dish_label.to_string(),
                        allergens: vec![entry.name.clone()],
                        severity: entry.severity,
                    });
                }
            }
        }

        Ok(MenuAnalysisResult {
            safe: risky_items.is_empty(),
            risky_items,
            safe_options: MENU_SAFE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            questions: MENU_SERVER_QUESTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

fn validate_profile(profile: &[AllergenProfileEntry]) -> Result<(), CoreError> {
    profile.iter().try_for_each(AllergenProfileEntry::validate)
}

/// 1-based line of the first occurrence of `needle` in `haystack`.
fn line_of(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|idx| haystack[..idx].matches('\n').count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allergen::entities::Severity;

    fn matcher() -> AllergenMatcher {
        AllergenMatcher::new(Arc::new(AllergenKnowledgeBase::builtin().unwrap()))
    }

    fn default_profile() -> Vec<AllergenProfileEntry> {
        vec![
            AllergenProfileEntry::new("Peanuts", Severity::Severe),
            AllergenProfileEntry::new("Shellfish", Severity::Moderate),
            AllergenProfileEntry::new("Dairy", Severity::Mild),
            AllergenProfileEntry::new("Gluten", Severity::Mild),
        ]
    }

    #[test]
    fn test_empty_profile_is_always_safe() {
        let result = matcher()
            .analyze_text("peanut oil, milk, shrimp, wheat", &[])
            .unwrap();

        assert!(result.safe);
        assert!(result.detected_allergens.is_empty());
        assert!(result.hidden_ingredients.is_empty());
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_peanut_oil_and_milk() {
        let profile = vec![
            AllergenProfileEntry::new("Peanuts", Severity::Severe),
            AllergenProfileEntry::new("Dairy", Severity::Mild),
        ];

        let result = matcher()
            .analyze_text("Contains peanut oil and milk", &profile)
            .unwrap();

        assert!(!result.safe);
        assert_eq!(
            result.detected_allergens,
            vec![
                DetectedAllergen {
                    name: "Peanuts".to_string(),
                    found_as: "peanut oil".to_string(),
                    severity: Severity::Severe,
                    line_number: 1,
                },
                DetectedAllergen {
                    name: "Dairy".to_string(),
                    found_as: "milk".to_string(),
                    severity: Severity::Mild,
                    line_number: 1,
                },
            ]
        );
        assert_eq!(
            result.hidden_ingredients,
            vec![
                HiddenIngredient {
                    name: "peanut oil".to_string(),
                    contains: "Peanuts".to_string(),
                },
                HiddenIngredient {
                    name: "milk".to_string(),
                    contains: "Dairy".to_string(),
                },
            ]
        );
        assert_eq!(result.alternatives.len(), 2);
        assert_eq!(result.alternatives[0].original, "Peanuts");
        assert_eq!(
            result.alternatives[0].alternatives,
            vec!["Sunflower seed butter", "Almond butter", "Tahini"]
        );
        assert_eq!(result.highest_severity(), Some(Severity::Severe));
    }

    #[test]
    fn test_canonical_name_detection() {
        let profile = vec![AllergenProfileEntry::new("Gluten", Severity::Mild)];
        let result = matcher()
            .analyze_text("Certified GLUTEN free", &profile)
            .unwrap();

        assert_eq!(result.detected_allergens.len(), 1);
        assert_eq!(result.detected_allergens[0].found_as, "gluten");
        assert!(result.hidden_ingredients.is_empty());
        assert_eq!(result.alternatives.len(), 1);
    }

    #[test]
    fn test_unknown_allergen_is_ignored() {
        let profile = vec![AllergenProfileEntry::new("Eggs", Severity::Severe)];
        let result = matcher().analyze_text("eggs, milk", &profile).unwrap();

        assert!(result.safe);
        assert!(result.detected_allergens.is_empty());
    }

    #[test]
    fn test_line_number_of_first_occurrence() {
        let profile = vec![AllergenProfileEntry::new("Shellfish", Severity::Moderate)];
        let text = "Water\nSalt\nGarlic shrimp paste";
        let result = matcher().analyze_text(text, &profile).unwrap();

        assert_eq!(result.detected_allergens.len(), 1);
        assert_eq!(result.detected_allergens[0].found_as, "shrimp");
        assert_eq!(result.detected_allergens[0].line_number, 3);
    }

    #[test]
    fn test_duplicate_profile_entries_are_reported_twice() {
        let profile = vec![
            AllergenProfileEntry::new("Dairy", Severity::Mild),
            AllergenProfileEntry::new("Dairy", Severity::Mild),
        ];
        let result = matcher().analyze_text("whey protein", &profile).unwrap();

        assert_eq!(result.detected_allergens.len(), 2);
        assert_eq!(result.alternatives.len(), 2);
    }

    #[test]
    fn test_blank_profile_entry_is_rejected() {
        let profile = vec![AllergenProfileEntry::new("", Severity::Mild)];
        let err = matcher().analyze_text("anything", &profile).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_safe_matches_detections() {
        let m = matcher();
        for text in ["", "rice and beans", "butter", "crab cakes with rye bread"] {
            let result = m.analyze_text(text, &default_profile()).unwrap();
            assert_eq!(result.safe, result.detected_allergens.is_empty());
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let m = matcher();
        let text = "Wheat flour, butter, arachis oil";
        let first = m.analyze_text(text, &default_profile()).unwrap();
        let second = m.analyze_text(text, &default_profile()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_menu_analysis_rules() {
        let result = matcher()
            .analyze_menu(
                "Caesar Salad, Garlic Bread, Shrimp Scampi",
                &default_profile(),
            )
            .unwrap();

        assert!(!result.safe);
        let labels: Vec<&str> = result.risky_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Shrimp Scampi", "Caesar Salad", "Any dishes with bread"]
        );
        assert_eq!(result.risky_items[0].allergens, vec!["Shellfish"]);
        assert_eq!(result.risky_items[0].severity, Severity::Moderate);
        assert_eq!(result.safe_options.len(), 3);
        assert_eq!(result.questions.len(), 2);
    }

    #[test]
    fn test_menu_egg_rule_needs_knowledge() {
        let profile = vec![AllergenProfileEntry::new("Eggs", Severity::Severe)];
        let result = matcher().analyze_menu("caesar salad", &profile).unwrap();

        assert!(result.safe);
        assert!(result.risky_items.is_empty());
    }
}
