//! Prediction results.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Where a prediction value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// The remote prediction service answered.
    Remote,
    /// The remote call failed and the Friedewald equation was used.
    Fallback,
}

/// LDL-C estimate in mg/dL, rounded to one decimal.
///
/// Both variants are displayed identically; the tag records which path
/// produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum PredictionResult {
    Remote(f64),
    Fallback(f64),
}

impl PredictionResult {
    pub const fn value(&self) -> f64 {
        match self {
            Self::Remote(value) | Self::Fallback(value) => *value,
        }
    }

    pub const fn source(&self) -> PredictionSource {
        match self {
            Self::Remote(_) => PredictionSource::Remote,
            Self::Fallback(_) => PredictionSource::Fallback,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// A classified prediction, ready for display or reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub result: PredictionResult,
    pub category: Category,
}

impl Prediction {
    pub const fn value(&self) -> f64 {
        self.result.value()
    }
}
