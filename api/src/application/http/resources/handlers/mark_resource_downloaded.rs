use allergy_compass_core::domain::{
    common::generate_timestamp,
    resource::{
        entities::{ResourceType, SavedResource},
        ports::ResourceService,
    },
};
use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/{resource_type}/download",
    tag = "resources",
    summary = "Mark resource downloaded",
    description = "Records that the first resource of this type was downloaded just now",
    params(
        ("resource_type" = ResourceType, Path, description = "emergency, restaurant, travel or education"),
    ),
    responses(
        (status = 200, body = SavedResource),
        (status = 400, description = "Unknown resource type"),
        (status = 404, description = "No resource of this type")
    )
)]
pub async fn mark_resource_downloaded(
    Path(resource_type): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<SavedResource>, ApiError> {
    let resource_type: ResourceType = resource_type.parse()?;

    let resource = state
        .service
        .mark_resource_downloaded(resource_type, generate_timestamp())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(resource))
}
