//! HTTP request handlers.

pub mod administrator_handler;
pub mod alert_handler;
pub mod identity_handler;
pub mod safe_house_handler;
pub mod user_handler;

pub use administrator_handler::administrator_routes;
pub use alert_handler::alert_routes;
pub use safe_house_handler::safe_house_routes;
pub use user_handler::user_routes;

use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Reject a replacement whose body names a different record than the route.
pub(crate) fn ensure_route_id(route_id: Uuid, body_id: Option<Uuid>) -> AppResult<()> {
    match body_id {
        Some(body_id) if body_id != route_id => {
            Err(AppError::bad_request("Route id does not match body id."))
        }
        _ => Ok(()),
    }
}
