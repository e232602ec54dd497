use allergy_compass_core::domain::food_data::{
    ports::FoodDataService,
    value_objects::{FindSubstitutesInput, SubstituteSuggestions},
};
use axum::extract::{Query, State};

use crate::application::http::{
    food::validators::GetSubstitutesParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/substitutes",
    tag = "food",
    summary = "Find ingredient substitutes",
    description = "Substitutes for an ingredient, without suggestions that mention one of the profile's allergies",
    params(GetSubstitutesParams),
    responses(
        (status = 200, body = SubstituteSuggestions),
        (status = 400, description = "Blank ingredient")
    )
)]
pub async fn get_substitutes(
    State(state): State<AppState>,
    Query(params): Query<GetSubstitutesParams>,
) -> Result<Response<SubstituteSuggestions>, ApiError> {
    let suggestions = state
        .service
        .find_substitutes(FindSubstitutesInput {
            ingredient: params.ingredient,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestions))
}
