use super::handlers::{
    analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
    analyze_menu::{__path_analyze_menu, analyze_menu},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_ingredients, analyze_menu))]
pub struct AnalyzerApiDoc;

pub fn analyzer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyzer/ingredients", state.args.server.root_path),
            post(analyze_ingredients),
        )
        .route(
            &format!("{}/analyzer/menu", state.args.server.root_path),
            post(analyze_menu),
        )
}
