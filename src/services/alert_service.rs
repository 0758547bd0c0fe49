//! Alert service - severity prediction.

use std::sync::Arc;

use crate::domain::{AlertFeatures, SeverityModel};

/// Alert service trait for dependency injection.
pub trait AlertService: Send + Sync {
    fn predict_severity(&self, features: &AlertFeatures) -> f32;
}

/// Delegates to the configured severity model.
pub struct AlertPredictor {
    model: Arc<dyn SeverityModel>,
}

impl AlertPredictor {
    pub fn new(model: Arc<dyn SeverityModel>) -> Self {
        Self { model }
    }
}

impl AlertService for AlertPredictor {
    fn predict_severity(&self, features: &AlertFeatures) -> f32 {
        let severity = self.model.predict(features);
        tracing::debug!(severity, "Severity predicted");
        severity
    }
}
