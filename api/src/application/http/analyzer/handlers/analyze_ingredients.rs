use allergy_compass_core::domain::allergen::{
    ports::AllergenAnalysisService,
    value_objects::{AnalysisResult, AnalyzeTextInput},
};
use axum::extract::State;

use crate::application::http::{
    analyzer::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "analyzer",
    summary = "Analyze ingredient list",
    description = "Finds the profile's allergens, including aliases, in an ingredient list",
    request_body = AnalyzeTextRequest,
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, description = "Empty or oversized text")
    )
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze_ingredients(AnalyzeTextInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
