//! Integration tests for the predict workflow.

use chrono::{NaiveDate, NaiveDateTime};
use ldl_cli::workflow::{ReportOutcome, run_prediction};
use ldl_core::{OfflineBackend, PredictionBackend, RawInputs};
use ldl_model::{
    Category, FieldError, InvalidReason, LipidPanel, PanelField, PredictionSource,
    RemoteServiceError,
};
use ldl_report::format_value;

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap()
}

struct PanickingBackend;

impl PredictionBackend for PanickingBackend {
    async fn predict(&self, _panel: &LipidPanel) -> Result<f64, RemoteServiceError> {
        panic!("backend must not be called for invalid input");
    }
}

#[tokio::test]
async fn offline_prediction_without_report() {
    let raw = RawInputs::new("200", "50", "150");
    let outcome = run_prediction(&OfflineBackend, &raw, None, generated_at())
        .await
        .unwrap();

    assert_eq!(outcome.ldl_c, 120.0);
    assert_eq!(outcome.source, PredictionSource::Fallback);
    assert_eq!(outcome.category, Category::NearOptimal);
    assert!(outcome.report.is_none());

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "inputs": {"total_cholesterol": 200.0, "hdl": 50.0, "triglycerides": 150.0},
            "ldl_c": 120.0,
            "source": "fallback",
            "category": "near_optimal",
            "category_label": "Near Optimal"
        })
    );
}

#[tokio::test]
async fn comma_decimals_and_padding_are_accepted() {
    let raw = RawInputs::new(" 200,5 ", "50.5", "150");
    let outcome = run_prediction(&OfflineBackend, &raw, None, generated_at())
        .await
        .unwrap();
    assert_eq!(outcome.inputs.total_cholesterol(), 200.5);
    assert_eq!(outcome.ldl_c, 120.0);
}

#[tokio::test]
async fn invalid_input_reports_every_field() {
    let raw = RawInputs::new("abc", "", "0");
    let error = run_prediction(&PanickingBackend, &raw, None, generated_at())
        .await
        .unwrap_err();
    assert_eq!(error.errors().len(), 3);
    for field in PanelField::ALL {
        assert_eq!(
            error.for_field(field).map(FieldError::user_message),
            Some(field.invalid_message())
        );
    }
}

#[tokio::test]
async fn invalid_input_keeps_rejection_reasons() {
    let raw = RawInputs::new("-5", "abc", "150");
    let error = run_prediction(&PanickingBackend, &raw, None, generated_at())
        .await
        .unwrap_err();
    let reasons: Vec<_> = error.errors().iter().map(|e| (e.field, e.reason)).collect();
    assert_eq!(
        reasons,
        vec![
            (PanelField::TotalCholesterol, InvalidReason::NotPositive),
            (PanelField::Hdl, InvalidReason::NotANumber),
        ]
    );
    assert_eq!(
        error.to_string(),
        "invalid input: TC: must be greater than zero, HDL-C: not a number"
    );
}

#[tokio::test]
async fn near_zero_estimate_renders_without_sign() {
    let raw = RawInputs::new("100", "80", "100.1");
    let outcome = run_prediction(&OfflineBackend, &raw, None, generated_at())
        .await
        .unwrap();
    assert_eq!(outcome.ldl_c, 0.0);
    assert!(outcome.ldl_c.is_sign_positive());
    assert_eq!(format_value(outcome.ldl_c), "0 mg/dL");
    assert_eq!(serde_json::to_value(&outcome).unwrap()["ldl_c"], 0.0);
}

#[tokio::test]
async fn report_is_saved_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let raw = RawInputs::new("200", "50", "150");
    let outcome = run_prediction(&OfflineBackend, &raw, Some(dir.path()), generated_at())
        .await
        .unwrap();

    let expected = dir.path().join("LDL-C_Report_2026-10-19.docx");
    assert_eq!(
        outcome.report,
        Some(ReportOutcome::Saved {
            path: expected.clone()
        })
    );
    assert!(!outcome.report_failed());
    assert!(std::fs::read(&expected).unwrap().starts_with(b"PK"));
}

#[tokio::test]
async fn unwritable_output_dir_keeps_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let raw = RawInputs::new("200", "50", "150");
    let outcome = run_prediction(&OfflineBackend, &raw, Some(&missing), generated_at())
        .await
        .unwrap();

    assert_eq!(outcome.ldl_c, 120.0);
    assert!(outcome.report_failed());
    assert_eq!(
        outcome.report,
        Some(ReportOutcome::Failed {
            message: "Failed to generate report. Please try again.".to_string()
        })
    );
}
