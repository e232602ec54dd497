use allergy_compass_core::domain::settings::{entities::AppSettings, ports::SettingsService};
use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "settings",
    summary = "Get app settings",
    responses(
        (status = 200, body = AppSettings)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Response<AppSettings>, ApiError> {
    let settings = state.service.get_settings().await.map_err(ApiError::from)?;

    Ok(Response::OK(settings))
}
