//! Record id taken from the `:id` route segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::errors::AppError;

/// Path id parsed as a UUID.
///
/// A malformed id is rejected as a 400 in the usual error envelope instead
/// of axum's plain-text rejection.
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected route id");
                AppError::bad_request("Route id must be a valid UUID.")
            })?;

        Ok(IdPath(id))
    }
}
