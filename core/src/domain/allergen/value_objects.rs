use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergen::entities::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectedAllergen {
    /// Allergen name as written in the profile.
    pub name: String,
    /// The text form that matched (canonical name or alias).
    pub found_as: String,
    pub severity: Severity,
    /// 1-based line of the first occurrence.
    pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HiddenIngredient {
    pub name: String,
    pub contains: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeSuggestion {
    pub original: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub safe: bool,
    pub detected_allergens: Vec<DetectedAllergen>,
    pub hidden_ingredients: Vec<HiddenIngredient>,
    pub alternatives: Vec<AlternativeSuggestion>,
}

impl AnalysisResult {
    /// Worst severity among detections, if any.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.detected_allergens.iter().map(|d| d.severity).max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskyItem {
    pub name: String,
    pub allergens: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuAnalysisResult {
    pub safe: bool,
    pub risky_items: Vec<RiskyItem>,
    pub safe_options: Vec<String>,
    pub questions: Vec<String>,
}

/// Keyword rule used by menu analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRule {
    pub menu_keyword: &'static str,
    pub required_allergen: &'static str,
    pub dish_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub text: String,
}
