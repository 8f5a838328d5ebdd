//! Prediction request orchestration.
//!
//! One submission makes exactly one backend attempt. Any backend failure is
//! replaced by the Friedewald estimate; there is no retry and no backoff.

use std::future::Future;

use ldl_model::{
    LipidPanel, PanelField, Prediction, PredictionResult, RemoteServiceError, ValidationError,
    round1,
};
use tracing::{debug, warn};

use crate::classify::classify;
use crate::formula::evaluate_panel;
use crate::validate::validate_inputs;

/// Raw text of the three form fields, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub total_cholesterol: String,
    pub hdl: String,
    pub triglycerides: String,
}

impl RawInputs {
    pub fn new(
        total_cholesterol: impl Into<String>,
        hdl: impl Into<String>,
        triglycerides: impl Into<String>,
    ) -> Self {
        Self {
            total_cholesterol: total_cholesterol.into(),
            hdl: hdl.into(),
            triglycerides: triglycerides.into(),
        }
    }

    pub fn get(&self, field: PanelField) -> &str {
        match field {
            PanelField::TotalCholesterol => &self.total_cholesterol,
            PanelField::Hdl => &self.hdl,
            PanelField::Triglycerides => &self.triglycerides,
        }
    }

    pub fn set(&mut self, field: PanelField, text: impl Into<String>) {
        let slot = match field {
            PanelField::TotalCholesterol => &mut self.total_cholesterol,
            PanelField::Hdl => &mut self.hdl,
            PanelField::Triglycerides => &mut self.triglycerides,
        };
        *slot = text.into();
    }
}

/// A source of LDL-C predictions for a validated panel.
///
/// Implemented by the HTTP client; tests use in-process doubles.
pub trait PredictionBackend {
    /// Predict LDL-C in mg/dL. The value need not be rounded.
    fn predict(
        &self,
        panel: &LipidPanel,
    ) -> impl Future<Output = Result<f64, RemoteServiceError>> + Send;
}

/// Backend used when remote prediction is turned off. Always fails, so every
/// prediction comes from the fallback formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

impl PredictionBackend for OfflineBackend {
    async fn predict(&self, _panel: &LipidPanel) -> Result<f64, RemoteServiceError> {
        Err(RemoteServiceError::Disabled)
    }
}

/// Validate raw inputs, then predict and classify.
///
/// Returns the validation error without contacting the backend when any
/// field is rejected.
pub async fn predict<B: PredictionBackend>(
    backend: &B,
    raw: &RawInputs,
) -> Result<Prediction, ValidationError> {
    let panel = validate_inputs(raw)?;
    Ok(predict_panel(backend, &panel).await)
}

/// Predict and classify an already validated panel.
pub async fn predict_panel<B: PredictionBackend>(backend: &B, panel: &LipidPanel) -> Prediction {
    let result = match backend.predict(panel).await {
        Ok(value) if value.is_finite() => {
            debug!("remote prediction succeeded");
            PredictionResult::Remote(round1(value))
        }
        Ok(_) => fallback(panel, &RemoteServiceError::NonFiniteValue),
        Err(error) => fallback(panel, &error),
    };
    Prediction {
        result,
        category: classify(result.value()),
    }
}

fn fallback(panel: &LipidPanel, error: &RemoteServiceError) -> PredictionResult {
    match error {
        RemoteServiceError::Disabled => debug!("remote prediction disabled, using Friedewald"),
        _ => warn!(%error, "remote prediction failed, using Friedewald"),
    }
    PredictionResult::Fallback(evaluate_panel(panel))
}
