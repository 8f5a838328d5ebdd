//! Data model for the LDL-C predictor.
//!
//! - [`LipidPanel`]: a validated set of TC, HDL-C and TG values
//! - [`PredictionResult`]: a rounded LDL-C estimate tagged with its source
//! - [`Category`]: the five reference bands an estimate falls into
//! - Error taxonomy for validation and the remote prediction service

pub mod category;
pub mod error;
pub mod panel;
pub mod prediction;

pub use category::Category;
pub use error::{FieldError, InvalidReason, RemoteServiceError, ValidationError};
pub use panel::{LipidPanel, PanelField, UNIT, round1};
pub use prediction::{Prediction, PredictionResult, PredictionSource};
