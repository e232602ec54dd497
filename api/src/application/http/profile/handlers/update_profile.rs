use allergy_compass_core::domain::profile::{entities::UserProfile, ports::ProfileService};
use axum::{Json, extract::State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "",
    tag = "profile",
    summary = "Replace user profile",
    request_body = UserProfile,
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Blank name or allergen")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .update_profile(profile)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
