use allergy_compass_core::domain::profile::ports::ProfileService;
use axum::extract::{Path, State};

use crate::application::http::{
    profile::handlers::get_allergens::AllergensResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/allergens/{index}",
    tag = "profile",
    summary = "Remove allergen",
    params(
        ("index" = usize, Path, description = "Position of the allergen in the profile"),
    ),
    responses(
        (status = 200, body = AllergensResponse),
        (status = 404, description = "No allergen at this index")
    )
)]
pub async fn remove_allergen(
    Path(index): Path<usize>,
    State(state): State<AppState>,
) -> Result<Response<AllergensResponse>, ApiError> {
    let allergens = state
        .service
        .remove_allergen(index)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AllergensResponse { data: allergens }))
}
