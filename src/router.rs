use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use axum::{Json, Router, middleware, routing::get};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use gradebook_config::ConfigError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>, ConfigError> {
    origins
        .iter()
        .map(|origin| {
            origin.parse().map_err(|_| ConfigError::Invalid {
                name: "ALLOWED_ORIGINS",
                reason: format!("{origin:?} is not a valid header value"),
            })
        })
        .collect()
}

/// Assembles the application router.
///
/// Fails if an allowed origin is not a valid header value or any protected
/// route was declared with an empty role set.
pub fn init_router(state: AppState) -> Result<Router, ConfigError> {
    let allowed_origins = parse_origins(&state.allowed_origins)?;

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(init_auth_router())
        .merge(init_users_router(&state)?)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware)))
}
