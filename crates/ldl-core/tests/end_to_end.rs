//! Submission to report, with the remote service unavailable.

use chrono::NaiveDate;
use ldl_core::{PredictionBackend, PredictorSession, predict_panel};
use ldl_model::{Category, LipidPanel, PanelField, PredictionResult, RemoteServiceError};
use ldl_report::{assemble, generate_report};

struct UnreachableBackend;

impl PredictionBackend for UnreachableBackend {
    async fn predict(&self, _panel: &LipidPanel) -> Result<f64, RemoteServiceError> {
        Err(RemoteServiceError::Network("connection refused".to_string()))
    }
}

#[tokio::test]
async fn fallback_prediction_flows_into_report() {
    let mut session = PredictorSession::new();
    session.set_field(PanelField::TotalCholesterol, "200");
    session.set_field(PanelField::Hdl, "50");
    session.set_field(PanelField::Triglycerides, "150");

    let submission = session.submit().unwrap();
    let prediction = predict_panel(&UnreachableBackend, &submission.panel).await;
    assert_eq!(prediction.result, PredictionResult::Fallback(120.0));
    assert_eq!(prediction.category, Category::NearOptimal);
    assert!(session.complete(submission.id, prediction));

    let generated_at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap();
    let request = session.report_request(generated_at).unwrap();

    let document = assemble(
        &request.panel,
        &request.prediction.result,
        request.prediction.category,
        request.generated_at,
    );
    let texts: Vec<&str> = document.texts().collect();
    for expected in [
        "200 mg/dL",
        "50 mg/dL",
        "150 mg/dL",
        "120 mg/dL",
        "Near Optimal",
        "< 100 mg/dL",
        "100-129 mg/dL",
        "130-159 mg/dL",
        "160-189 mg/dL",
        "≥ 190 mg/dL",
    ] {
        assert!(texts.contains(&expected), "missing {expected:?}");
    }

    let file = generate_report(&request).unwrap();
    assert_eq!(file.file_name, "LDL-C_Report_2026-10-19.docx");
    assert!(!file.bytes.is_empty());
}
