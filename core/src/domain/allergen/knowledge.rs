use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{allergen::entities::AllergenInfo, common::entities::app_errors::CoreError};

const BUILTIN_KNOWLEDGE: &str = include_str!("../../../resources/allergen_knowledge.json");

const GENERIC_ALTERNATIVES: [&str; 3] = ["Alternative 1", "Alternative 2", "Alternative 3"];

#[derive(Debug, Deserialize)]
struct KnowledgeDocument {
    allergens: BTreeMap<String, AllergenInfo>,
    #[serde(default)]
    substitutes: BTreeMap<String, Vec<String>>,
}

/// Read-only allergen tables, keyed by lowercase canonical name.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllergenKnowledgeBase {
    allergens: BTreeMap<String, AllergenInfo>,
    substitutes: BTreeMap<String, Vec<String>>,
}

impl AllergenKnowledgeBase {
    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_json(BUILTIN_KNOWLEDGE)
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read knowledge file {}: {}", path.display(), e);
            CoreError::Storage(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let document: KnowledgeDocument = serde_json::from_str(raw)?;

        let allergens = document
            .allergens
            .into_iter()
            .map(|(name, info)| (normalize(&name), clean_info(info)))
            .filter(|(name, _)| !name.is_empty())
            .collect::<BTreeMap<_, _>>();

        let substitutes = document
            .substitutes
            .into_iter()
            .map(|(name, list)| (normalize(&name), list))
            .collect();

        tracing::debug!("Loaded allergen knowledge for {} allergens", allergens.len());

        Ok(Self {
            allergens,
            substitutes,
        })
    }

    /// Case-insensitive lookup of a canonical allergen.
    pub fn lookup(&self, name: &str) -> Option<&AllergenInfo> {
        self.allergens.get(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Substitutes for an allergen, falling back to a generic placeholder list.
    pub fn alternatives_for(&self, name: &str) -> Vec<String> {
        match self.lookup(name) {
            Some(info) if !info.alternatives.is_empty() => info.alternatives.clone(),
            _ => GENERIC_ALTERNATIVES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Ingredient-level substitutes, e.g. "milk" -> oat milk.
    pub fn ingredient_substitutes(&self, ingredient: &str) -> Option<&[String]> {
        self.substitutes
            .get(&normalize(ingredient))
            .map(|list| list.as_slice())
    }

    pub fn allergen_names(&self) -> impl Iterator<Item = &str> {
        self.allergens.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.allergens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allergens.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

// An empty alias would match every text.
fn clean_info(mut info: AllergenInfo) -> AllergenInfo {
    info.aliases.retain(|alias| !alias.trim().is_empty());
    info.hidden_sources.retain(|source| !source.trim().is_empty());
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_knowledge_loads() {
        let knowledge = AllergenKnowledgeBase::builtin().unwrap();
        assert_eq!(knowledge.len(), 4);
        let names: Vec<&str> = knowledge.allergen_names().collect();
        assert_eq!(names, vec!["dairy", "gluten", "peanuts", "shellfish"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let knowledge = AllergenKnowledgeBase::builtin().unwrap();
        let dairy = knowledge.lookup("  Dairy ").unwrap();
        assert!(dairy.aliases.contains(&"casein".to_string()));
        assert!(knowledge.lookup("eggs").is_none());
    }

    #[test]
    fn test_alternatives_fall_back_to_generic_list() {
        let knowledge = AllergenKnowledgeBase::from_json(
            r#"{"allergens": {"Sesame": {"aliases": ["tahini"]}}}"#,
        )
        .unwrap();

        assert!(knowledge.contains("sesame"));
        assert_eq!(
            knowledge.alternatives_for("sesame"),
            vec!["Alternative 1", "Alternative 2", "Alternative 3"]
        );
        assert_eq!(knowledge.alternatives_for("unknown").len(), 3);
    }

    #[test]
    fn test_blank_aliases_are_dropped() {
        let knowledge = AllergenKnowledgeBase::from_json(
            r#"{"allergens": {"soy": {"aliases": ["", "  ", "edamame"]}}}"#,
        )
        .unwrap();

        assert_eq!(knowledge.lookup("soy").unwrap().aliases, vec!["edamame"]);
    }

    #[test]
    fn test_ingredient_substitutes() {
        let knowledge = AllergenKnowledgeBase::builtin().unwrap();
        let milk = knowledge.ingredient_substitutes("Milk").unwrap();
        assert_eq!(milk.len(), 4);
        assert!(knowledge.ingredient_substitutes("saffron").is_none());
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let err = AllergenKnowledgeBase::from_json("{\"allergens\": 3}").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}
