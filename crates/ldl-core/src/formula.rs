//! Friedewald equation.

use ldl_model::{LipidPanel, round1};

/// `LDL-C = TC - HDL-C - TG / 5`, rounded to one decimal.
///
/// Inputs are not validated here.
pub fn evaluate(total_cholesterol: f64, hdl: f64, triglycerides: f64) -> f64 {
    round1(total_cholesterol - hdl - triglycerides / 5.0)
}

pub fn evaluate_panel(panel: &LipidPanel) -> f64 {
    evaluate(panel.total_cholesterol(), panel.hdl(), panel.triglycerides())
}
