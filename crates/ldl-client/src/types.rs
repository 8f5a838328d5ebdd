//! Wire types of the prediction service.

use ldl_model::LipidPanel;
use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictRequest {
    #[serde(rename = "TC")]
    pub total_cholesterol: f64,
    #[serde(rename = "HDL_C")]
    pub hdl: f64,
    #[serde(rename = "TG")]
    pub triglycerides: f64,
}

impl From<&LipidPanel> for PredictRequest {
    fn from(panel: &LipidPanel) -> Self {
        Self {
            total_cholesterol: panel.total_cholesterol(),
            hdl: panel.hdl(),
            triglycerides: panel.triglycerides(),
        }
    }
}

/// Successful answer of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "LDL-C", alias = "ldl_c")]
    pub ldl_c: f64,
}

/// Answer of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_service_keys() {
        let panel = LipidPanel::new(200.0, 50.5, 150.0).unwrap();
        let json = serde_json::to_value(PredictRequest::from(&panel)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"TC": 200.0, "HDL_C": 50.5, "TG": 150.0})
        );
    }

    #[test]
    fn test_response_accepts_both_spellings() {
        let dashed: PredictResponse = serde_json::from_str(r#"{"LDL-C": 98.4}"#).unwrap();
        let snake: PredictResponse = serde_json::from_str(r#"{"ldl_c": 98.4}"#).unwrap();
        assert_eq!(dashed, snake);
    }
}
