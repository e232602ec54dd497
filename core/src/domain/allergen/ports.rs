use std::future::Future;

use crate::domain::{
    allergen::value_objects::{AnalysisResult, AnalyzeTextInput, MenuAnalysisResult},
    common::entities::app_errors::CoreError,
};

/// Checks free text against the allergens stored on the user's profile.
pub trait AllergenAnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn analyze_menu(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<MenuAnalysisResult, CoreError>> + Send;
}
