//! LDL-C report generation library.
//!
//! This crate turns a prediction into a downloadable Word document:
//!
//! - **Assembly**: [`assemble`] lays out the report as a [`ReportDocument`]
//! - **Serialization**: [`render_docx`] writes the document as `.docx` bytes
//! - **Delivery**: [`generate_report`] combines both and names the file;
//!   [`ReportFile::write_to_dir`] saves it atomically

pub mod assemble;
pub mod document;
pub mod docx;
pub mod error;
mod request;
mod xml;

// Re-export public types and functions
pub use assemble::{REPORT_TITLE, assemble, format_timestamp, format_value};
pub use document::{
    Alignment, Block, DocumentBuilder, DocumentProperties, HeadingLevel, ReportDocument, Spacing,
    TextRun,
};
pub use docx::{DOCX_MIME_TYPE, render_docx};
pub use error::{ReportGenerationError, Result};
pub use request::{ReportFile, ReportRequest, generate_report, report_file_name};
