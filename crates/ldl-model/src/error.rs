//! Error types for input validation and the remote prediction service.

use std::fmt;

use thiserror::Error;

use crate::panel::PanelField;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Empty after trimming.
    Missing,
    /// Not a finite number.
    NotANumber,
    /// Zero or negative.
    NotPositive,
}

impl InvalidReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotANumber => "not a number",
            Self::NotPositive => "must be greater than zero",
        }
    }
}

/// A rejected field and the reason it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: PanelField,
    pub reason: InvalidReason,
}

impl FieldError {
    /// Message shown to the user next to the field.
    pub fn user_message(&self) -> String {
        self.field.invalid_message()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason.as_str())
    }
}

/// One or more panel fields failed validation.
///
/// The submission is blocked and no remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Build from a list of field errors, `None` when the list is empty.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error for a specific field, if that field was rejected.
    pub fn for_field(&self, field: PanelField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn has_field(&self, field: PanelField) -> bool {
        self.for_field(field).is_some()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures of the remote prediction service.
///
/// These never reach the user: the orchestrator replaces the remote value
/// with the Friedewald estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RemoteServiceError {
    /// Remote prediction is turned off in the configuration.
    #[error("remote prediction is disabled")]
    Disabled,

    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("prediction service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response body could not be parsed.
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// The response parsed but the value is NaN or infinite.
    #[error("prediction service returned a non-finite value")]
    NonFiniteValue,
}

impl RemoteServiceError {
    /// Returns whether the failure came from the transport rather than the service.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_requires_errors() {
        assert!(ValidationError::from_errors(vec![]).is_none());
    }

    #[test]
    fn test_validation_error_display_lists_fields() {
        let error = ValidationError::from_errors(vec![
            FieldError {
                field: PanelField::TotalCholesterol,
                reason: InvalidReason::Missing,
            },
            FieldError {
                field: PanelField::Triglycerides,
                reason: InvalidReason::NotPositive,
            },
        ])
        .unwrap();
        assert_eq!(
            error.to_string(),
            "invalid input: TC: missing, TG: must be greater than zero"
        );
        assert!(error.has_field(PanelField::Triglycerides));
        assert!(!error.has_field(PanelField::Hdl));
    }

    #[test]
    fn test_field_error_user_message() {
        let error = FieldError {
            field: PanelField::Hdl,
            reason: InvalidReason::NotANumber,
        };
        assert_eq!(error.user_message(), "Please enter a valid HDL-C value");
    }

    #[test]
    fn test_remote_error_transport() {
        assert!(RemoteServiceError::Network("refused".to_string()).is_transport());
        assert!(
            !RemoteServiceError::Status {
                status: 500,
                body: String::new()
            }
            .is_transport()
        );
    }
}
