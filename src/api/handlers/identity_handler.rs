//! Request shapes and handler bodies shared by the administrator and
//! user endpoints.

use std::sync::Arc;

use axum::{http::StatusCode, response::Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::ensure_route_id;
use crate::domain::{IdentityKind, IdentityResponse};
use crate::errors::AppResult;
use crate::services::IdentityService;

/// Identity registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateIdentityRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required."))]
    #[schema(example = "Admin A")]
    pub name: String,
    /// Email address (stored trimmed and lowercase)
    #[validate(length(min = 1, message = "Email is required."))]
    #[schema(example = "A@Ex.com")]
    pub email: String,
    /// Password (minimum 6 characters)
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
}

/// Identity replacement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateIdentityRequest {
    /// Must equal the route id when present
    #[serde(default)]
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "Name is required."))]
    #[schema(example = "Admin B")]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required."))]
    #[schema(example = "b@ex.com")]
    pub email: String,
    #[schema(example = "secret2", min_length = 6)]
    pub password: String,
}

/// Credential check request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthenticateRequest {
    #[schema(example = "a@ex.com")]
    pub email: String,
    #[schema(example = "secret1")]
    pub password: String,
}

pub(super) async fn list<K: IdentityKind>(
    service: Arc<dyn IdentityService<K>>,
) -> AppResult<Json<Vec<IdentityResponse>>> {
    let identities = service.get_all().await?;
    Ok(Json(identities.into_iter().map(IdentityResponse::from).collect()))
}

pub(super) async fn get<K: IdentityKind>(
    service: Arc<dyn IdentityService<K>>,
    id: Uuid,
) -> AppResult<Json<IdentityResponse>> {
    let identity = service.get_by_id(id).await?;
    Ok(Json(IdentityResponse::from(identity)))
}

pub(super) async fn create<K: IdentityKind>(
    service: Arc<dyn IdentityService<K>>,
    payload: CreateIdentityRequest,
) -> AppResult<(StatusCode, Json<IdentityResponse>)> {
    let identity = service
        .create(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(IdentityResponse::from(identity))))
}

pub(super) async fn update<K: IdentityKind>(
    service: Arc<dyn IdentityService<K>>,
    id: Uuid,
    payload: UpdateIdentityRequest,
) -> AppResult<StatusCode> {
    ensure_route_id(id, payload.id)?;

    service
        .update(id, &payload.name, &payload.email, &payload.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn delete<K: IdentityKind>(
    service: Arc<dyn IdentityService<K>>,
    id: Uuid,
) -> AppResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn authenticate<K: IdentityKind>(
    service: Arc<dyn IdentityService<K>>,
    payload: AuthenticateRequest,
) -> AppResult<Json<IdentityResponse>> {
    let identity = service
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(IdentityResponse::from(identity)))
}
