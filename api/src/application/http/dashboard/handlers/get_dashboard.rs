use allergy_compass_core::domain::{
    common::{parse_iso_date, today},
    journal::{
        ports::JournalService,
        value_objects::{Dashboard, GetDashboardInput},
    },
};
use axum::extract::{Query, State};

use crate::application::http::{
    dashboard::validators::GetDashboardParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

const DEFAULT_RECENT_LIMIT: usize = 3;

#[utoipa::path(
    get,
    path = "",
    tag = "dashboard",
    summary = "Get dashboard",
    description = "Journal statistics, six-month severity series and recent days relative to `as_of`",
    params(GetDashboardParams),
    responses(
        (status = 200, body = Dashboard),
        (status = 400, description = "Malformed as_of date")
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<GetDashboardParams>,
) -> Result<Response<Dashboard>, ApiError> {
    let as_of = match params.as_of.as_deref() {
        Some(raw) => parse_iso_date(raw)?,
        None => today(),
    };

    let dashboard = state
        .service
        .get_dashboard(GetDashboardInput {
            as_of,
            recent_limit: params.limit.unwrap_or(DEFAULT_RECENT_LIMIT),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(dashboard))
}
