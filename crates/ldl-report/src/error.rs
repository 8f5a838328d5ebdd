//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating or delivering a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportGenerationError {
    /// A numeric input was NaN, infinite, or otherwise unusable.
    #[error("invalid report input: {0}")]
    InvalidInput(String),

    /// Text contains characters that XML 1.0 cannot represent.
    #[error("text cannot be written to the document: {0:?}")]
    InvalidText(String),

    /// Writing the XML parts failed.
    #[error("XML write error: {0}")]
    Xml(String),

    /// Building the ZIP package failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// Writing the finished file failed.
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportGenerationError {
    /// Returns a user-friendly message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        "Failed to generate report. Please try again."
    }
}

impl From<zip::result::ZipError> for ReportGenerationError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportGenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_actionable() {
        let err = ReportGenerationError::InvalidInput("NaN".to_string());
        assert!(err.user_message().contains("try again"));
        assert!(err.to_string().contains("NaN"));
    }
}
