use allergy_compass_core::domain::journal::{entities::JournalEntry, ports::JournalService};
use axum::{Json, extract::State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "",
    tag = "journal",
    summary = "Record journal day",
    description = "Stores the entry, replacing any existing entry with the same date",
    request_body = JournalEntry,
    responses(
        (status = 200, body = JournalEntry),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn upsert_entry(
    State(state): State<AppState>,
    Json(entry): Json<JournalEntry>,
) -> Result<Response<JournalEntry>, ApiError> {
    let entry = state
        .service
        .record_entry(entry)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(entry))
}
