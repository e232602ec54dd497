use allergy_compass_core::domain::resource::{entities::SavedResource, ports::ResourceService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ResourcesResponse {
    pub data: Vec<SavedResource>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "resources",
    summary = "List saved resources",
    responses(
        (status = 200, body = ResourcesResponse)
    )
)]
pub async fn get_resources(
    State(state): State<AppState>,
) -> Result<Response<ResourcesResponse>, ApiError> {
    let resources = state.service.get_resources().await.map_err(ApiError::from)?;

    Ok(Response::OK(ResourcesResponse { data: resources }))
}
