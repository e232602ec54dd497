use allergy_compass_core::domain::{
    allergen::entities::AllergenProfileEntry, profile::ports::ProfileService,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AllergensResponse {
    pub data: Vec<AllergenProfileEntry>,
}

#[utoipa::path(
    get,
    path = "/allergens",
    tag = "profile",
    summary = "List profile allergens",
    responses(
        (status = 200, body = AllergensResponse)
    )
)]
pub async fn get_allergens(
    State(state): State<AppState>,
) -> Result<Response<AllergensResponse>, ApiError> {
    let allergens = state.service.get_allergens().await.map_err(ApiError::from)?;

    Ok(Response::OK(AllergensResponse { data: allergens }))
}
