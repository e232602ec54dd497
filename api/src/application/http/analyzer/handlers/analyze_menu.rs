use allergy_compass_core::domain::allergen::{
    ports::AllergenAnalysisService,
    value_objects::{AnalyzeTextInput, MenuAnalysisResult},
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
    path = "/menu",
    tag = "analyzer",
    summary = "Analyze restaurant menu",
    request_body = AnalyzeTextRequest,
    responses(
        (status = 200, body = MenuAnalysisResult),
        (status = 400, description = "Empty or oversized text")
    )
)]
pub async fn analyze_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<MenuAnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze_menu(AnalyzeTextInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
