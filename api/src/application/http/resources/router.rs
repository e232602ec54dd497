use super::handlers::{
    get_resources::{__path_get_resources, get_resources},
    mark_resource_downloaded::{__path_mark_resource_downloaded, mark_resource_downloaded},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_resources, mark_resource_downloaded))]
pub struct ResourcesApiDoc;

pub fn resources_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/resources", state.args.server.root_path),
            get(get_resources),
        )
        .route(
            &format!(
                "{}/resources/{{resource_type}}/download",
                state.args.server.root_path
            ),
            post(mark_resource_downloaded),
        )
}
