use crate::application::http::{
    analyzer::router::AnalyzerApiDoc, dashboard::router::DashboardApiDoc,
    food::router::FoodApiDoc, health::router::HealthApiDoc, journal::router::JournalApiDoc,
    profile::router::ProfileApiDoc, resources::router::ResourcesApiDoc,
    server::api_entities::api_error::ErrorResponse, settings::router::SettingsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AllergyCompass API"
    ),
    components(schemas(ErrorResponse)),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/journal", api = JournalApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/analyzer", api = AnalyzerApiDoc),
        (path = "/food", api = FoodApiDoc),
        (path = "/settings", api = SettingsApiDoc),
        (path = "/resources", api = ResourcesApiDoc),
    )
)]
pub struct ApiDoc;
