//! User handlers.

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

/// Create user routes
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user)
                .put(update_user)
                .delete(delete_user),
        )
        // Credential checks get the stricter limiter
        .merge(
            Router::new()
                .route("/authenticate", post(authenticate_user))
                .route_layer(middleware::from_fn_with_state(
                    state,
                    rate_limit_auth_middleware,
                )),
        )
}

/// List users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<IdentityResponse>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<IdentityResponse>>> {
    identity_handler::list(state.users).await
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = IdentityResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<IdentityResponse>> {
    identity_handler::get(state.users, id).await
}

/// Create user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateIdentityRequest,
    responses(
        (status = 201, description = "User created", body = IdentityResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateIdentityRequest>,
) -> AppResult<(StatusCode, Json<IdentityResponse>)> {
    identity_handler::create(state.users, payload).await
}

/// Replace user name, email and password
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateIdentityRequest,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Validation error or id mismatch"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateIdentityRequest>,
) -> AppResult<StatusCode> {
    identity_handler::update(state.users, id, payload).await
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    identity_handler::delete(state.users, id).await
}

/// Check user credentials
#[utoipa::path(
    post,
    path = "/api/users/authenticate",
    tag = "Users",
    request_body = AuthenticateRequest,
    responses(
        (status = 200, description = "Credentials valid", body = IdentityResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 429, description = "Too many attempts")
    )
)]
pub async fn authenticate_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthenticateRequest>,
) -> AppResult<Json<IdentityResponse>> {
    identity_handler::authenticate(state.users, payload).await
}
