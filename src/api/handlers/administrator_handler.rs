//! Administrator handlers.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use super::identity_handler::{
    self, AuthenticateRequest, CreateIdentityRequest, UpdateIdentityRequest,
};
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::middleware::rate_limit_auth_middleware;
use crate::api::AppState;
use crate::domain::IdentityResponse;
use crate::errors::AppResult;

/// Create administrator routes
pub fn administrator_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_administrators).post(create_administrator))
        .route(
            "/:id",
            get(get_administrator)
                .put(update_administrator)
                .delete(delete_administrator),
        )
        // Credential checks get the stricter limiter
        .merge(
            Router::new()
                .route("/authenticate", post(authenticate_administrator))
                .route_layer(middleware::from_fn_with_state(
                    state,
                    rate_limit_auth_middleware,
                )),
        )
}

/// List administrators
#[utoipa::path(
    get,
    path = "/api/administrators",
    tag = "Administrators",
    responses(
        (status = 200, description = "All administrators", body = Vec<IdentityResponse>)
    )
)]
pub async fn list_administrators(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<IdentityResponse>>> {
    identity_handler::list(state.administrators).await
}

/// Get administrator by ID
#[utoipa::path(
    get,
    path = "/api/administrators/{id}",
    tag = "Administrators",
    params(("id" = Uuid, Path, description = "Administrator ID")),
    responses(
        (status = 200, description = "Administrator found", body = IdentityResponse),
        (status = 404, description = "Administrator not found")
    )
)]
pub async fn get_administrator(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<IdentityResponse>> {
    identity_handler::get(state.administrators, id).await
}

/// Create administrator
#[utoipa::path(
    post,
    path = "/api/administrators",
    tag = "Administrators",
    request_body = CreateIdentityRequest,
    responses(
        (status = 201, description = "Administrator created", body = IdentityResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_administrator(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateIdentityRequest>,
) -> AppResult<(StatusCode, Json<IdentityResponse>)> {
    identity_handler::create(state.administrators, payload).await
}

/// Replace administrator name, email and password
#[utoipa::path(
    put,
    path = "/api/administrators/{id}",
    tag = "Administrators",
    params(("id" = Uuid, Path, description = "Administrator ID")),
    request_body = UpdateIdentityRequest,
    responses(
        (status = 204, description = "Administrator updated"),
        (status = 400, description = "Validation error or id mismatch"),
        (status = 404, description = "Administrator not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_administrator(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateIdentityRequest>,
) -> AppResult<StatusCode> {
    identity_handler::update(state.administrators, id, payload).await
}

/// Delete administrator
#[utoipa::path(
    delete,
    path = "/api/administrators/{id}",
    tag = "Administrators",
    params(("id" = Uuid, Path, description = "Administrator ID")),
    responses(
        (status = 204, description = "Administrator deleted"),
        (status = 404, description = "Administrator not found")
    )
)]
pub async fn delete_administrator(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    identity_handler::delete(state.administrators, id).await
}

/// Check administrator credentials
#[utoipa::path(
    post,
    path = "/api/administrators/authenticate",
    tag = "Administrators",
    request_body = AuthenticateRequest,
    responses(
        (status = 200, description = "Credentials valid", body = IdentityResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 429, description = "Too many attempts")
    )
)]
pub async fn authenticate_administrator(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthenticateRequest>,
) -> AppResult<Json<IdentityResponse>> {
    identity_handler::authenticate(state.administrators, payload).await
}
