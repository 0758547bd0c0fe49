//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    administrator_handler, alert_handler, identity_handler, safe_house_handler, user_handler,
};
use crate::domain::{AlertFeatures, IdentityResponse, SafeHouseResponse, SeverityResponse};

/// OpenAPI documentation for the safe house registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Safe House Registry",
        version = "0.1.0",
        description = "Administrators, users and safe houses, with alert severity prediction",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        administrator_handler::list_administrators,
        administrator_handler::get_administrator,
        administrator_handler::create_administrator,
        administrator_handler::update_administrator,
        administrator_handler::delete_administrator,
        administrator_handler::authenticate_administrator,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::authenticate_user,
        safe_house_handler::list_safe_houses,
        safe_house_handler::get_safe_house,
        safe_house_handler::create_safe_house,
        safe_house_handler::update_safe_house,
        safe_house_handler::delete_safe_house,
        alert_handler::predict_severity,
    ),
    components(
        schemas(
            IdentityResponse,
            SafeHouseResponse,
            AlertFeatures,
            SeverityResponse,
            identity_handler::CreateIdentityRequest,
            identity_handler::UpdateIdentityRequest,
            identity_handler::AuthenticateRequest,
            safe_house_handler::SafeHouseRequest,
        )
    ),
    tags(
        (name = "Administrators", description = "Administrator registry and credential checks"),
        (name = "Users", description = "User registry and credential checks"),
        (name = "Safe houses", description = "Safe house registry"),
        (name = "Alerts", description = "Alert severity prediction")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/administrators/{id}"));
        assert!(paths.contains_key("/api/users/authenticate"));
        assert!(paths.contains_key("/api/safe-houses"));
        assert!(paths.contains_key("/api/alerts/predict"));
    }
}
