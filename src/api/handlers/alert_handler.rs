//! Alert handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};

use crate::api::AppState;
use crate::domain::{AlertFeatures, SeverityResponse};
use crate::errors::{AppError, AppResult};

/// Create alert routes
pub fn alert_routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict_severity))
}

/// Predict alert severity from three numeric features
#[utoipa::path(
    post,
    path = "/api/alerts/predict",
    tag = "Alerts",
    request_body = AlertFeatures,
    responses(
        (status = 200, description = "Predicted severity", body = SeverityResponse),
        (status = 400, description = "Malformed features")
    )
)]
pub async fn predict_severity(
    State(state): State<AppState>,
    payload: Result<Json<AlertFeatures>, JsonRejection>,
) -> AppResult<Json<SeverityResponse>> {
    let Json(features) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let severity = state.alerts.predict_severity(&features);
    Ok(Json(SeverityResponse { severity }))
}
