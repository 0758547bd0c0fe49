//! Alert severity prediction contract.
//!
//! The model itself lives outside the domain; the domain only fixes the
//! shape of its input and output.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three numeric features a severity model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertFeatures {
    #[schema(example = 0.5)]
    pub feature1: f32,
    #[schema(example = 1.2)]
    pub feature2: f32,
    #[schema(example = 3.0)]
    pub feature3: f32,
}

impl AlertFeatures {
    pub fn new(feature1: f32, feature2: f32, feature3: f32) -> Self {
        Self {
            feature1,
            feature2,
            feature3,
        }
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.feature1, self.feature2, self.feature3]
    }
}

/// Opaque severity model: three features in, one score out.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait SeverityModel: Send + Sync {
    fn predict(&self, features: &AlertFeatures) -> f32;
}

/// Predicted severity (safe to return to client)
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct SeverityResponse {
    #[schema(example = 2.75)]
    pub severity: f32,
}
