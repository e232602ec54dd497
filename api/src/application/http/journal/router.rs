use super::handlers::{
    get_entries::{__path_get_entries, get_entries},
    get_entry::{__path_get_entry, get_entry},
    upsert_entry::{__path_upsert_entry, upsert_entry},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_entries, upsert_entry, get_entry))]
pub struct JournalApiDoc;

pub fn journal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/journal", state.args.server.root_path),
            get(get_entries).put(upsert_entry),
        )
        .route(
            &format!("{}/journal/{{date}}", state.args.server.root_path),
            get(get_entry),
        )
}
