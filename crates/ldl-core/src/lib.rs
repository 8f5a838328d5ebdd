//! Core logic of the LDL-C predictor.
//!
//! The flow for one submission is:
//!
//! 1. [`validate::validate_inputs`] turns raw text into a [`LipidPanel`]
//! 2. [`predict::predict_panel`] asks a [`PredictionBackend`] once and falls
//!    back to [`formula::evaluate`] on any failure
//! 3. [`classify::classify`] maps the value to a [`Category`]
//!
//! [`session::PredictorSession`] holds the form state between submissions.
//!
//! [`LipidPanel`]: ldl_model::LipidPanel
//! [`Category`]: ldl_model::Category

pub mod classify;
pub mod formula;
pub mod predict;
pub mod session;
pub mod validate;

pub use classify::classify;
pub use formula::{evaluate, evaluate_panel};
pub use predict::{OfflineBackend, PredictionBackend, RawInputs, predict, predict_panel};
pub use session::{DisplayedResult, PredictorSession, Submission, SubmissionId};
pub use validate::{filter_input, parse_field, validate_inputs};
