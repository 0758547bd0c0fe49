//! Linear severity model loaded from a JSON weights file.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{AlertFeatures, SeverityModel};
use crate::errors::{AppError, AppResult};

/// `severity = w1*f1 + w2*f2 + w3*f3 + bias`
///
/// File format: `{"weights": [w1, w2, w3], "bias": b}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearSeverityModel {
    pub weights: [f32; 3],
    #[serde(default)]
    pub bias: f32,
}

impl LinearSeverityModel {
    pub fn new(weights: [f32; 3], bias: f32) -> Self {
        Self { weights, bias }
    }

    /// Load weights from `path`.
    ///
    /// A missing file yields the zero model with a warning; an unreadable
    /// or malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Severity model file not found, predictions will be zero"
                );
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::internal(format!(
                    "Failed to read severity model {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let model: Self = serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(format!("Invalid severity model {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), "Severity model loaded");
        Ok(model)
    }
}

impl SeverityModel for LinearSeverityModel {
    fn predict(&self, features: &AlertFeatures) -> f32 {
        self.weights
            .iter()
            .zip(features.as_array())
            .map(|(w, f)| w * f)
            .sum::<f32>()
            + self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("severity-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_predict_is_weighted_sum_plus_bias() {
        let model = LinearSeverityModel::new([1.0, 2.0, 0.5], 0.25);
        let severity = model.predict(&AlertFeatures::new(1.0, 1.0, 2.0));

        assert!((severity - 4.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_loads_zero_model() {
        let model = LinearSeverityModel::load(temp_path()).unwrap();

        assert_eq!(model, LinearSeverityModel::default());
        assert_eq!(model.predict(&AlertFeatures::new(5.0, 6.0, 7.0)), 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path();
        std::fs::write(&path, r#"{"weights": [0.5, 0.25, 2.0], "bias": 1.0}"#).unwrap();

        let model = LinearSeverityModel::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(model, LinearSeverityModel::new([0.5, 0.25, 2.0], 1.0));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_path();
        std::fs::write(&path, r#"{"weights": [1.0]}"#).unwrap();

        let result = LinearSeverityModel::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
