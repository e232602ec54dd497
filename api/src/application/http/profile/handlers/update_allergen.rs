use allergy_compass_core::domain::profile::{
    ports::ProfileService, value_objects::UpdateAllergenInput,
};
use axum::extract::{Path, State};

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
    put,
    path = "/allergens/{index}",
    tag = "profile",
    summary = "Update allergen",
    params(
        ("index" = usize, Path, description = "Position of the allergen in the profile"),
    ),
    request_body = AllergenValidator,
    responses(
        (status = 200, body = AllergensResponse),
        (status = 404, description = "No allergen at this index")
    )
)]
pub async fn update_allergen(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AllergenValidator>,
) -> Result<Response<AllergensResponse>, ApiError> {
    let allergens = state
        .service
        .update_allergen(UpdateAllergenInput {
            index,
            name: payload.name,
            severity: payload.severity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AllergensResponse { data: allergens }))
}
