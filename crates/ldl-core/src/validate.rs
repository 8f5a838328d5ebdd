//! Input filtering and validation of raw form text.

use ldl_model::{FieldError, InvalidReason, LipidPanel, PanelField, ValidationError};

use crate::predict::RawInputs;

/// Filter an edit to a numeric field.
///
/// The first `,` becomes `.` so comma-decimal keyboards work. The edit is
/// accepted when the result is empty or consists of digits with at most one
/// `.`; otherwise `None` is returned and the previous text should be kept.
pub fn filter_input(text: &str) -> Option<String> {
    let normalized = text.replacen(',', ".", 1);
    let mut seen_dot = false;
    for ch in normalized.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    Some(normalized)
}

/// Parse one field to a finite, strictly positive number.
pub fn parse_field(field: PanelField, raw: &str) -> Result<f64, FieldError> {
    let reject = |reason| FieldError { field, reason };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(reject(InvalidReason::Missing));
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| reject(InvalidReason::NotANumber))?;
    if !value.is_finite() {
        return Err(reject(InvalidReason::NotANumber));
    }
    if value <= 0.0 {
        return Err(reject(InvalidReason::NotPositive));
    }
    Ok(value)
}

/// Validate all three fields, reporting every rejected field at once.
pub fn validate_inputs(raw: &RawInputs) -> Result<LipidPanel, ValidationError> {
    let results = PanelField::ALL.map(|field| parse_field(field, raw.get(field)));
    let errors: Vec<FieldError> = results.iter().filter_map(|result| result.err()).collect();
    if let Some(error) = ValidationError::from_errors(errors) {
        return Err(error);
    }
    let [tc, hdl, tg] = results.map(|result| result.unwrap_or_default());
    Ok(LipidPanel::new_unchecked(tc, hdl, tg))
}
