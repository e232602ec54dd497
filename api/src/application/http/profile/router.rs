use super::handlers::{
    add_allergen::{__path_add_allergen, add_allergen},
    get_allergens::{__path_get_allergens, get_allergens},
    get_profile::{__path_get_profile, get_profile},
    remove_allergen::{__path_remove_allergen, remove_allergen},
    update_allergen::{__path_update_allergen, update_allergen},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_profile,
    update_profile,
    get_allergens,
    add_allergen,
    update_allergen,
    remove_allergen
))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile).put(update_profile),
        )
        .route(
            &format!("{}/profile/allergens", state.args.server.root_path),
            get(get_allergens).post(add_allergen),
        )
        .route(
            &format!("{}/profile/allergens/{{index}}", state.args.server.root_path),
            put(update_allergen).delete(remove_allergen),
        )
}
