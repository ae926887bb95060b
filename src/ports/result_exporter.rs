//! Result Exporter Port - Rendering interface for ranked results.
//!
//! This port defines the contract for turning a `RankedResult` into a
//! document a person can download or receive by mail. The application layer
//! depends on this trait, while adapters (like `CsvResultExporter`) provide
//! the implementation.

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::topsis::RankedResult;

/// Base filename used for every export.
pub const RESULTS_BASE_FILENAME: &str = "topsis_results";

/// Port for rendering ranked results.
///
/// # Contract
///
/// Implementations must:
/// - Emit the header row first, then one line/row per alternative
/// - Keep alternatives in input order
/// - Emit original cells unmodified apart from format escaping
/// - Use the displayed (rounded) score, never the full-precision one
///
/// # Usage
///
/// ```rust,ignore
/// let exporter: &dyn ResultExporter = get_exporter();
///
/// let doc = exporter.export(&result)?;
/// std::fs::write(&doc.filename, &doc.content)?;
/// ```
pub trait ResultExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Renders the result as text.
    fn render(&self, result: &RankedResult) -> Result<String, ExportError>;

    /// Renders the result into a downloadable document.
    fn export(&self, result: &RankedResult) -> Result<ExportedResults, ExportError> {
        let rendered = self.render(result)?;
        Ok(ExportedResults::new(
            rendered.into_bytes(),
            self.format(),
            RESULTS_BASE_FILENAME,
        ))
    }

    /// Renders the result straight into `writer`.
    fn write_to(&self, result: &RankedResult, writer: &mut dyn Write) -> Result<(), ExportError> {
        let rendered = self.render(result)?;
        writer
            .write_all(rendered.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ExportError::io_error(e.to_string()))
    }
}

/// Export formats supported by the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// HTML table fragment.
    Html,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported results with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedResults {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedResults {
    /// Create a new export.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Rendering failed.
    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    /// I/O error while writing the export.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a rendering error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        let code = match err {
            ExportError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            ExportError::RenderFailed(_) | ExportError::IoError(_) => ErrorCode::ExportFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
