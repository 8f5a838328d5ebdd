//! Report generation entry point and file delivery.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use ldl_model::{LipidPanel, PanelField, Prediction};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::docx::render_docx;
use crate::error::{ReportGenerationError, Result};

/// Everything needed to produce one report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRequest {
    pub panel: LipidPanel,
    pub prediction: Prediction,
    pub generated_at: NaiveDateTime,
}

/// A finished `.docx` report ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `LDL-C_Report_<YYYY-MM-DD>.docx`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("LDL-C_Report_{}.docx", date.format("%Y-%m-%d"))
}

/// Assemble and serialize a report.
pub fn generate_report(request: &ReportRequest) -> Result<ReportFile> {
    ensure_finite(request)?;
    let document = assemble(
        &request.panel,
        &request.prediction.result,
        request.prediction.category,
        request.generated_at,
    );
    let bytes = render_docx(&document)?;
    let file_name = report_file_name(request.generated_at.date());
    debug!(file = %file_name, bytes = bytes.len(), "report generated");
    Ok(ReportFile { file_name, bytes })
}

fn ensure_finite(request: &ReportRequest) -> Result<()> {
    for field in PanelField::ALL {
        let value = request.panel.get(field);
        if !value.is_finite() {
            return Err(ReportGenerationError::InvalidInput(format!(
                "{} is {value}",
                field.short_label()
            )));
        }
    }
    let value = request.prediction.value();
    if !value.is_finite() {
        return Err(ReportGenerationError::InvalidInput(format!(
            "LDL-C is {value}"
        )));
    }
    Ok(())
}

impl ReportFile {
    /// Write the report into `dir`, replacing any file of the same name.
    ///
    /// The bytes go to a temporary file in the same directory which is then
    /// renamed into place, so readers never see a truncated report.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        let io_error = |source: std::io::Error| ReportGenerationError::Io {
            path: path.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
        temp.write_all(&self.bytes).map_err(io_error)?;
        temp.flush().map_err(io_error)?;
        temp.persist(&path).map_err(|err| io_error(err.error))?;

        info!(path = %path.display(), "report saved");
        Ok(path)
    }
}
