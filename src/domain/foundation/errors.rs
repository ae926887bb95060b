//! Error types shared by the application layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::domain::topsis::{ErrorKind, TopsisError};

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    ParseError,
    ShapeMismatch,
    ShapeTooSmall,
    NonNumericCell,
    DegenerateInput,

    // Export errors
    UnsupportedFormat,
    ExportFailed,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns true for errors the caller can fix by changing the input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::ParseError
                | ErrorCode::ShapeMismatch
                | ErrorCode::ShapeTooSmall
                | ErrorCode::NonNumericCell
                | ErrorCode::DegenerateInput
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::ShapeTooSmall => "SHAPE_TOO_SMALL",
            ErrorCode::NonNumericCell => "NON_NUMERIC_CELL",
            ErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ParseError => ErrorCode::ParseError,
            ErrorKind::ShapeMismatch => ErrorCode::ShapeMismatch,
            ErrorKind::ShapeTooSmall => ErrorCode::ShapeTooSmall,
            ErrorKind::NonNumericCell => ErrorCode::NonNumericCell,
            ErrorKind::DegenerateInput => ErrorCode::DegenerateInput,
        }
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<TopsisError> for DomainError {
    fn from(err: TopsisError) -> Self {
        let base = DomainError::new(err.kind().into(), err.to_string());
        match err {
            TopsisError::NonNumericCell { row, column, .. } => base
                .with_detail("row", row.to_string())
                .with_detail("column", column.to_string()),
            TopsisError::CriteriaCountMismatch { given, criteria } => base
                .with_detail("given", given.to_string())
                .with_detail("criteria", criteria.to_string()),
            TopsisError::ZeroNormColumn { column, .. } => {
                base.with_detail("column", column.to_string())
            }
            _ => base,
        }
    }
}
