use allergy_compass_core::domain::settings::{
    entities::AppSettings, ports::SettingsService, value_objects::UpdateSettingsInput,
};
use axum::{Json, extract::State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "",
    tag = "settings",
    summary = "Update app settings",
    description = "Fields left out of the body keep their current value",
    request_body = UpdateSettingsInput,
    responses(
        (status = 200, body = AppSettings)
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettingsInput>,
) -> Result<Response<AppSettings>, ApiError> {
    let settings = state
        .service
        .update_settings(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(settings))
}
