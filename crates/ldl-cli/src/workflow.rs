//! One prediction from raw command-line text to an optional saved report.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use ldl_core::{PredictionBackend, PredictorSession, RawInputs, predict_panel};
use ldl_model::{
    Category, LipidPanel, PanelField, Prediction, PredictionSource, ValidationError,
};
use ldl_report::generate_report;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::logging::redact_value;

/// What happened to the requested report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Saved { path: PathBuf },
    Failed { message: String },
}

/// Result of the `predict` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictOutcome {
    pub inputs: LipidPanel,
    pub ldl_c: f64,
    pub source: PredictionSource,
    pub category: Category,
    pub category_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportOutcome>,
}

impl PredictOutcome {
    fn new(panel: LipidPanel, prediction: Prediction) -> Self {
        Self {
            inputs: panel,
            ldl_c: prediction.value(),
            source: prediction.result.source(),
            category: prediction.category,
            category_label: prediction.category.label(),
            report: None,
        }
    }

    pub fn report_failed(&self) -> bool {
        matches!(self.report, Some(ReportOutcome::Failed { .. }))
    }
}

/// Validate, predict with `backend`, and optionally save a report into
/// `report_dir`.
///
/// Validation errors stop before any backend call. Report failures do not
/// discard the prediction; they are recorded in the outcome.
pub async fn run_prediction<B: PredictionBackend>(
    backend: &B,
    raw: &RawInputs,
    report_dir: Option<&Path>,
    generated_at: NaiveDateTime,
) -> Result<PredictOutcome, ValidationError> {
    let mut inputs = RawInputs::default();
    for field in PanelField::ALL {
        inputs.set(field, raw.get(field).trim());
    }
    let mut session = PredictorSession::new();
    session.load_inputs(inputs);

    let submission = session.submit()?;
    info!(
        id = submission.id.get(),
        tc = %redact_value(submission.panel.total_cholesterol()),
        hdl = %redact_value(submission.panel.hdl()),
        tg = %redact_value(submission.panel.triglycerides()),
        "submission accepted"
    );

    let prediction = predict_panel(backend, &submission.panel).await;
    if !session.complete(submission.id, prediction) {
        warn!(id = submission.id.get(), "prediction was not recorded");
    }
    info!(
        ldl_c = %redact_value(prediction.value()),
        category = %prediction.category,
        "prediction complete"
    );

    let mut outcome = PredictOutcome::new(submission.panel, prediction);
    if let Some(dir) = report_dir {
        outcome.report = session
            .report_request(generated_at)
            .map(|request| save_report(&request, dir));
    }
    Ok(outcome)
}

fn save_report(request: &ldl_report::ReportRequest, dir: &Path) -> ReportOutcome {
    match generate_report(request).and_then(|file| file.write_to_dir(dir)) {
        Ok(path) => ReportOutcome::Saved { path },
        Err(err) => {
            error!(%err, "report generation failed");
            ReportOutcome::Failed {
                message: err.user_message().to_string(),
            }
        }
    }
}
