use super::handlers::{
    get_recipes::{__path_get_recipes, get_recipes},
    get_substitutes::{__path_get_substitutes, get_substitutes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_substitutes, get_recipes))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food/substitutes", state.args.server.root_path),
            get(get_substitutes),
        )
        .route(
            &format!("{}/food/recipes", state.args.server.root_path),
            get(get_recipes),
        )
}
