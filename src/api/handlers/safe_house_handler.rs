//! Safe house handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::ensure_route_id;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::SafeHouseResponse;
use crate::errors::AppResult;

/// Safe house create/replace request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SafeHouseRequest {
    /// Must equal the route id when present (replace only)
    #[serde(default)]
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "Postal code is required."))]
    #[schema(example = "01310-100")]
    pub postal_code: String,
    #[validate(length(min = 1, message = "Number is required."))]
    #[schema(example = "1578")]
    pub number: String,
    #[serde(default)]
    #[schema(example = "Block B")]
    pub complement: Option<String>,
}

/// Create safe house routes
pub fn safe_house_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_safe_houses).post(create_safe_house))
        .route(
            "/:id",
            get(get_safe_house)
                .put(update_safe_house)
                .delete(delete_safe_house),
        )
}

/// List safe houses
#[utoipa::path(
    get,
    path = "/api/safe-houses",
    tag = "Safe houses",
    responses(
        (status = 200, description = "All safe houses", body = Vec<SafeHouseResponse>)
    )
)]
pub async fn list_safe_houses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SafeHouseResponse>>> {
    let safe_houses = state.safe_houses.get_all().await?;
    Ok(Json(safe_houses.into_iter().map(SafeHouseResponse::from).collect()))
}

/// Get safe house by ID
#[utoipa::path(
    get,
    path = "/api/safe-houses/{id}",
    tag = "Safe houses",
    params(("id" = Uuid, Path, description = "Safe house ID")),
    responses(
        (status = 200, description = "Safe house found", body = SafeHouseResponse),
        (status = 404, description = "Safe house not found")
    )
)]
pub async fn get_safe_house(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<SafeHouseResponse>> {
    let safe_house = state.safe_houses.get_by_id(id).await?;
    Ok(Json(SafeHouseResponse::from(safe_house)))
}

/// Create safe house
#[utoipa::path(
    post,
    path = "/api/safe-houses",
    tag = "Safe houses",
    request_body = SafeHouseRequest,
    responses(
        (status = 201, description = "Safe house created", body = SafeHouseResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_safe_house(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SafeHouseRequest>,
) -> AppResult<(StatusCode, Json<SafeHouseResponse>)> {
    let safe_house = state
        .safe_houses
        .create(
            &payload.postal_code,
            &payload.number,
            payload.complement.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(SafeHouseResponse::from(safe_house))))
}

/// Replace safe house
#[utoipa::path(
    put,
    path = "/api/safe-houses/{id}",
    tag = "Safe houses",
    params(("id" = Uuid, Path, description = "Safe house ID")),
    request_body = SafeHouseRequest,
    responses(
        (status = 204, description = "Safe house updated"),
        (status = 400, description = "Validation error or id mismatch"),
        (status = 404, description = "Safe house not found")
    )
)]
pub async fn update_safe_house(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<SafeHouseRequest>,
) -> AppResult<StatusCode> {
    ensure_route_id(id, payload.id)?;

    state
        .safe_houses
        .update(
            id,
            &payload.postal_code,
            &payload.number,
            payload.complement.as_deref(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete safe house
#[utoipa::path(
    delete,
    path = "/api/safe-houses/{id}",
    tag = "Safe houses",
    params(("id" = Uuid, Path, description = "Safe house ID")),
    responses(
        (status = 204, description = "Safe house deleted"),
        (status = 404, description = "Safe house not found")
    )
)]
pub async fn delete_safe_house(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    state.safe_houses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
