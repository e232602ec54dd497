use allergy_compass_core::domain::profile::{entities::UserProfile, ports::ProfileService};
use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get user profile",
    description = "Returns the profile of the local user, including allergies, symptoms, medications and emergency contacts",
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn get_profile(State(state): State<AppState>) -> Result<Response<UserProfile>, ApiError> {
    let profile = state.service.get_profile().await.map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
