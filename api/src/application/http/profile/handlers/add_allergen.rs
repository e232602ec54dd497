use allergy_compass_core::domain::profile::{ports::ProfileService, value_objects::AddAllergenInput};
use axum::extract::State;

use crate::application::http::{
    profile::{handlers::get_allergens::AllergensResponse, validators::AllergenValidator},
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
    path = "/allergens",
    tag = "profile",
    summary = "Add allergen",
    description = "Appends an allergen to the profile and returns the updated list",
    request_body = AllergenValidator,
    responses(
        (status = 201, body = AllergensResponse),
        (status = 400, description = "Invalid allergen")
    )
)]
pub async fn add_allergen(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AllergenValidator>,
) -> Result<Response<AllergensResponse>, ApiError> {
    let allergens = state
        .service
        .add_allergen(AddAllergenInput {
            name: payload.name,
            severity: payload.severity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AllergensResponse { data: allergens }))
}
