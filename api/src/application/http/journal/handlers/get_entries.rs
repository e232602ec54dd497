use allergy_compass_core::domain::journal::{entities::JournalEntry, ports::JournalService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct JournalEntriesResponse {
    pub data: Vec<JournalEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "journal",
    summary = "List journal entries",
    description = "All journal days, newest first",
    responses(
        (status = 200, body = JournalEntriesResponse)
    )
)]
pub async fn get_entries(
    State(state): State<AppState>,
) -> Result<Response<JournalEntriesResponse>, ApiError> {
    let entries = state.service.get_entries().await.map_err(ApiError::from)?;

    Ok(Response::OK(JournalEntriesResponse { data: entries }))
}
