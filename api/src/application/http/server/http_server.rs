use std::sync::{Arc, OnceLock};

use crate::application::http::analyzer::router::analyzer_routes;
use crate::application::http::dashboard::router::dashboard_routes;
use crate::application::http::food::router::food_routes;
use crate::application::http::health::health_routes;
use crate::application::http::journal::router::journal_routes;
use crate::application::http::profile::router::profile_routes;
use crate::application::http::resources::router::resources_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::settings::router::settings_routes;
use crate::args::Args;

use allergy_compass_core::{
    application::create_service, domain::common::AllergyCompassConfig,
};
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

static METRIC_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = AllergyCompassConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// The global recorder can only be installed once per process.
fn metric_handle() -> PrometheusHandle {
    METRIC_HANDLE
        .get_or_init(|| {
            let (_, handle) = PrometheusMetricLayer::pair();
            handle
        })
        .clone()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin '{}': {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let prometheus_layer = PrometheusMetricLayer::new();
    let metric_handle = metric_handle();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(health_routes(&root_path))
        .merge(profile_routes(state.clone()))
        .merge(journal_routes(state.clone()))
        .merge(dashboard_routes(state.clone()))
        .merge(analyzer_routes(state.clone()))
        .merge(food_routes(state.clone()))
        .merge(settings_routes(state.clone()))
        .merge(resources_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use super::*;

    async fn test_server(extra_args: &[&str]) -> (TempDir, TestServer) {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("allergy_compass.json");
        let data_path = data_path.to_str().unwrap();

        let mut argv = vec!["allergy-compass-api", "--data-path", data_path];
        argv.extend_from_slice(extra_args);
        let args = Arc::new(Args::parse_from(argv));

        let state = state(args).await.unwrap();
        let server = TestServer::new(router(state).unwrap()).unwrap();

        (dir, server)
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, server) = test_server(&[]).await;

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn test_routes_honour_root_path() {
        let (_dir, server) = test_server(&["--server-root-path", "/api"]).await;

        server.get("/api/profile").await.assert_status_ok();
        server
            .get("/profile")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_analyze_ingredients_against_seeded_profile() {
        let (_dir, server) = test_server(&[]).await;

        let response = server
            .post("/analyzer/ingredients")
            .json(&json!({ "text": "Contains peanut oil and milk" }))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["safe"], false);
        assert_eq!(body["detectedAllergens"].as_array().unwrap().len(), 2);
        assert_eq!(body["detectedAllergens"][0]["foundAs"], "peanut oil");
        assert_eq!(body["detectedAllergens"][0]["lineNumber"], 1);
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let (_dir, server) = test_server(&[]).await;

        let response = server
            .post("/analyzer/menu")
            .json(&json!({ "text": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        assert_eq!(body["code"], "E_VALIDATION");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_allergen_crud() {
        let (_dir, server) = test_server(&[]).await;

        let response = server
            .post("/profile/allergens")
            .json(&json!({ "name": "Sesame", "severity": "moderate" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["data"][4]["name"], "Sesame");

        server
            .put("/profile/allergens/4")
            .json(&json!({ "name": "Sesame", "severity": "severe" }))
            .await
            .assert_status_ok();

        let response = server.delete("/profile/allergens/0").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"][0]["name"], "Shellfish");

        let response = server.delete("/profile/allergens/42").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "E_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_journal_and_dashboard() {
        let (_dir, server) = test_server(&[]).await;

        server
            .put("/journal")
            .json(&json!({
                "date": "2025-03-30",
                "meals": [{ "time": "12:30", "name": "Lunch", "items": "Rice bowl", "reactions": null }],
                "reactions": null,
                "notes": ""
            }))
            .await
            .assert_status_ok();

        let response = server.get("/journal/2025-03-30").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["meals"][0]["items"], "Rice bowl");

        server
            .get("/journal/2024-01-01")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/journal/yesterday")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .get("/dashboard")
            .add_query_param("as_of", "2025-03-30")
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["stats"]["reactionFreeDays"], 2);
        assert_eq!(body["stats"]["trackedMeals"], 4);
        assert_eq!(body["severitySeries"]["months"][5], "Mar");
        assert_eq!(body["recentEntries"][0]["label"], "Today");
    }

    #[tokio::test]
    async fn test_dashboard_rejects_bad_date() {
        let (_dir, server) = test_server(&[]).await;

        server
            .get("/dashboard")
            .add_query_param("as_of", "30/03/2025")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_food_lookups() {
        let (_dir, server) = test_server(&[]).await;

        let response = server
            .get("/food/substitutes")
            .add_query_param("ingredient", "milk")
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["substitutes"],
            json!(["almond milk", "soy milk", "oat milk", "coconut milk"])
        );

        let response = server
            .get("/food/recipes")
            .add_query_param("query", "asian")
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_settings_and_resources() {
        let (_dir, server) = test_server(&[]).await;

        let response = server.put("/settings").json(&json!({ "theme": "dark" })).await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "notifications": true,
                "emergencyAccess": true,
                "dataSharing": false,
                "theme": "dark"
            })
        );

        let response = server.post("/resources/emergency/download").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["downloaded"], true);
        assert!(body["lastDownloaded"].is_string());

        server
            .post("/resources/brochure/download")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_openapi_and_metrics_are_served() {
        let (_dir, server) = test_server(&[]).await;

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let paths = response.json::<Value>()["paths"].clone();
        assert!(paths.get("/analyzer/ingredients").is_some());
        assert!(paths.get("/profile/allergens/{index}").is_some());

        server.get("/metrics").await.assert_status_ok();
    }
}
