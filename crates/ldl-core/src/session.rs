//! Explicitly owned form state for one user.
//!
//! A session holds the raw field text, per-field errors, the loading flag
//! and the currently displayed result. Every submission gets a
//! [`SubmissionId`]; only the latest one may replace the displayed result,
//! so a slow earlier request can never overwrite a newer answer.

use chrono::NaiveDateTime;
use ldl_model::{FieldError, LipidPanel, PanelField, Prediction, ValidationError};
use ldl_report::ReportRequest;
use tracing::{info, warn};

use crate::predict::RawInputs;
use crate::validate::{filter_input, validate_inputs};

/// Sequence number of a submission within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// A validated submission waiting for its prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub panel: LipidPanel,
}

/// The result currently on screen and the panel it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayedResult {
    pub panel: LipidPanel,
    pub prediction: Prediction,
}

#[derive(Debug, Default)]
pub struct PredictorSession {
    inputs: RawInputs,
    errors: Vec<FieldError>,
    in_flight: Option<Submission>,
    displayed: Option<DisplayedResult>,
    last_id: u64,
}

impl PredictorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// Apply an edit to a field.
    ///
    /// Edits that are not a partial decimal number are ignored and `false` is
    /// returned. An accepted edit clears that field's error.
    pub fn set_field(&mut self, field: PanelField, text: &str) -> bool {
        let Some(filtered) = filter_input(text) else {
            return false;
        };
        self.inputs.set(field, filtered);
        self.errors.retain(|error| error.field != field);
        true
    }

    /// Replace every field with text that did not come from keystrokes.
    ///
    /// The text is stored as given so that validation reports why it was
    /// rejected. All field errors are cleared.
    pub fn load_inputs(&mut self, inputs: RawInputs) {
        self.inputs = inputs;
        self.errors.clear();
    }

    pub fn field_error(&self, field: PanelField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn displayed(&self) -> Option<&DisplayedResult> {
        self.displayed.as_ref()
    }

    /// Validate the form and start a submission.
    ///
    /// On success the displayed result is cleared and any earlier in-flight
    /// submission becomes stale. On failure the field errors are recorded and
    /// nothing else changes.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        let panel = match validate_inputs(&self.inputs) {
            Ok(panel) => panel,
            Err(error) => {
                self.errors = error.errors().to_vec();
                return Err(error);
            }
        };
        self.errors.clear();
        self.last_id += 1;
        let submission = Submission {
            id: SubmissionId(self.last_id),
            panel,
        };
        if let Some(previous) = self.in_flight.replace(submission) {
            info!(
                superseded = previous.id.get(),
                id = submission.id.get(),
                "submission superseded"
            );
        }
        self.displayed = None;
        Ok(submission)
    }

    /// Record the prediction for a submission.
    ///
    /// Returns `false` and leaves the state untouched when `id` is not the
    /// latest submission.
    pub fn complete(&mut self, id: SubmissionId, prediction: Prediction) -> bool {
        match self.in_flight {
            Some(submission) if submission.id == id => {
                self.in_flight = None;
                self.displayed = Some(DisplayedResult {
                    panel: submission.panel,
                    prediction,
                });
                true
            }
            _ => {
                warn!(id = id.get(), "dropping stale prediction");
                false
            }
        }
    }

    /// Inputs for a report of the displayed result, `None` when nothing is shown.
    pub fn report_request(&self, generated_at: NaiveDateTime) -> Option<ReportRequest> {
        self.displayed.map(|shown| ReportRequest {
            panel: shown.panel,
            prediction: shown.prediction,
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ldl_model::{Category, InvalidReason, PredictionResult};

    use super::*;

    fn filled_session() -> PredictorSession {
        let mut session = PredictorSession::new();
        assert!(session.set_field(PanelField::TotalCholesterol, "200"));
        assert!(session.set_field(PanelField::Hdl, "50"));
        assert!(session.set_field(PanelField::Triglycerides, "150"));
        session
    }

    fn prediction(value: f64, category: Category) -> Prediction {
        Prediction {
            result: PredictionResult::Fallback(value),
            category,
        }
    }

    #[test]
    fn test_set_field_filters_input() {
        let mut session = PredictorSession::new();
        assert!(session.set_field(PanelField::Hdl, "50,3"));
        assert_eq!(session.inputs().hdl, "50.3");
        assert!(!session.set_field(PanelField::Hdl, "50.3a"));
        assert_eq!(session.inputs().hdl, "50.3");
    }

    #[test]
    fn test_failed_submit_records_errors_until_edited() {
        let mut session = PredictorSession::new();
        session.set_field(PanelField::TotalCholesterol, "200");
        let error = session.submit().unwrap_err();
        assert_eq!(error.errors().len(), 2);
        assert!(!session.is_loading());
        assert_eq!(
            session.field_error(PanelField::Hdl).map(|e| e.reason),
            Some(InvalidReason::Missing)
        );

        session.set_field(PanelField::Hdl, "5");
        assert!(session.field_error(PanelField::Hdl).is_none());
        assert!(session.field_error(PanelField::Triglycerides).is_some());
    }

    #[test]
    fn test_loaded_inputs_keep_rejection_reason() {
        let mut session = PredictorSession::new();
        session.load_inputs(RawInputs::new("-5", "abc", "150"));
        let error = session.submit().unwrap_err();
        assert_eq!(error.errors().len(), 2);
        assert_eq!(
            session.field_error(PanelField::TotalCholesterol).map(|e| e.reason),
            Some(InvalidReason::NotPositive)
        );
        assert_eq!(
            session.field_error(PanelField::Hdl).map(|e| e.reason),
            Some(InvalidReason::NotANumber)
        );
    }

    #[test]
    fn test_submit_and_complete() {
        let mut session = filled_session();
        let submission = session.submit().unwrap();
        assert!(session.is_loading());
        assert!(session.displayed().is_none());

        assert!(session.complete(submission.id, prediction(120.0, Category::NearOptimal)));
        assert!(!session.is_loading());
        let shown = session.displayed().unwrap();
        assert_eq!(shown.panel.total_cholesterol(), 200.0);
        assert_eq!(shown.prediction.category, Category::NearOptimal);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut session = filled_session();
        let first = session.submit().unwrap();
        session.set_field(PanelField::Triglycerides, "400");
        let second = session.submit().unwrap();
        assert!(second.id > first.id);

        // The newer request finishes first; the older one must not overwrite it.
        assert!(session.complete(second.id, prediction(90.0, Category::Optimal)));
        assert!(!session.complete(first.id, prediction(120.0, Category::NearOptimal)));
        let shown = session.displayed().unwrap();
        assert_eq!(shown.prediction.value(), 90.0);
        assert_eq!(shown.panel.triglycerides(), 400.0);
    }

    #[test]
    fn test_report_request_requires_result() {
        let generated_at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap();
        let mut session = filled_session();
        assert!(session.report_request(generated_at).is_none());

        let submission = session.submit().unwrap();
        session.complete(submission.id, prediction(120.0, Category::NearOptimal));
        let request = session.report_request(generated_at).unwrap();
        assert_eq!(request.panel.hdl(), 50.0);
        assert_eq!(request.prediction.value(), 120.0);
        assert_eq!(request.generated_at, generated_at);
    }
}
