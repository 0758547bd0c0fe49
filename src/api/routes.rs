//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{administrator_routes, alert_routes, safe_house_routes, user_routes};
use super::middleware::rate_limit_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::HEALTH_PROBE_KEY;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no rate limiting)
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Registry endpoints (general rate limiting)
        .nest(
            "/api",
            api_routes(state.clone()).route_layer(middleware::from_fn_with_state(
                state.clone(),
                rate_limit_middleware,
            )),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resource routes mounted under `/api`
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/administrators", administrator_routes(state.clone()))
        .nest("/users", user_routes(state))
        .nest("/safe-houses", safe_house_routes())
        .nest("/alerts", alert_routes())
}

/// Root endpoint
async fn root() -> &'static str {
    "Safe House Registry"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
    redis: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn from_probe<E: std::fmt::Display>(probe: Option<Result<(), E>>) -> Self {
        match probe {
            None => Self {
                status: "disabled",
                error: None,
            },
            Some(Ok(())) => Self {
                status: "healthy",
                error: None,
            },
            Some(Err(e)) => Self {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        }
    }

    fn is_unhealthy(&self) -> bool {
        self.status == "unhealthy"
    }
}

/// Health check endpoint with database and Redis connectivity check.
///
/// Components that are not configured report `disabled` and do not
/// degrade the overall status.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_probe = match state.database.as_ref() {
        Some(database) => Some(database.ping().await),
        None => None,
    };

    let redis_probe = match state.cache.as_ref() {
        Some(cache) => Some(cache.exists(HEALTH_PROBE_KEY).await.map(|_| ())),
        None => None,
    };

    let db_status = ServiceStatus::from_probe(db_probe);
    let redis_status = ServiceStatus::from_probe(redis_probe);

    let all_healthy = !db_status.is_unhealthy() && !redis_status.is_unhealthy();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            database: db_status,
            redis: redis_status,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
