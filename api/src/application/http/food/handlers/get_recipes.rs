use allergy_compass_core::domain::food_data::{
    entities::Recipe, ports::FoodDataService, value_objects::FindRecipesInput,
};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::GetRecipesParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "food",
    summary = "Find safe recipes",
    description = "Catalogue recipes matching the query that contain none of the profile's allergies",
    params(GetRecipesParams),
    responses(
        (status = 200, body = RecipesResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(params): Query<GetRecipesParams>,
) -> Result<Response<RecipesResponse>, ApiError> {
    let recipes = state
        .service
        .find_safe_recipes(FindRecipesInput {
            query: params.query.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipesResponse { data: recipes }))
}
