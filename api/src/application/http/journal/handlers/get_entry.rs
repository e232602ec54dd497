use allergy_compass_core::domain::{
    common::parse_iso_date,
    journal::{entities::JournalEntry, ports::JournalService},
};
use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{date}",
    tag = "journal",
    summary = "Get journal day",
    params(
        ("date" = String, Path, description = "Day in YYYY-MM-DD format"),
    ),
    responses(
        (status = 200, body = JournalEntry),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No entry for this day")
    )
)]
pub async fn get_entry(
    Path(date): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<JournalEntry>, ApiError> {
    let date = parse_iso_date(&date)?;
    let entry = state.service.get_entry(date).await?;

    Ok(Response::OK(entry))
}
