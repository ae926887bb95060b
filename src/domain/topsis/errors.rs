//! TOPSIS input errors.
//!
//! Every variant is a terminal validation failure: the caller fixes the
//! input and resubmits. Row and column numbers use spreadsheet coordinates
//! (1-based, header row and identifier column included).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coarse error category reported to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A weight or impact token could not be parsed.
    ParseError,
    /// Counts of weights, impacts, criteria or row cells disagree.
    ShapeMismatch,
    /// The table is smaller than 2 rows x 3 columns.
    ShapeTooSmall,
    /// A criterion cell is not a real number.
    NonNumericCell,
    /// A criterion column cannot be normalized.
    DegenerateInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::ParseError => "PARSE_ERROR",
            ErrorKind::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorKind::ShapeTooSmall => "SHAPE_TOO_SMALL",
            ErrorKind::NonNumericCell => "NON_NUMERIC_CELL",
            ErrorKind::DegenerateInput => "DEGENERATE_INPUT",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while turning raw input into a decision problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Weights must be numeric values separated by commas (weight {position} is '{token}')")]
    InvalidWeight { position: usize, token: String },

    #[error("Impacts must be either + or - separated by commas (impact {position} is '{token}')")]
    InvalidImpact { position: usize, token: String },

    #[error("Number of weights ({weights}) must equal number of impacts ({impacts}).")]
    WeightImpactCountMismatch { weights: usize, impacts: usize },

    #[error("Number of weights/impacts ({given}) must match number of criteria ({criteria}).")]
    CriteriaCountMismatch { given: usize, criteria: usize },

    #[error("Row {row} has {actual} cells but the header declares {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("File must contain at least 2 rows (header + data), got {rows}.")]
    TooFewRows { rows: usize },

    #[error("File must contain at least 3 columns, got {columns}.")]
    TooFewColumns { columns: usize },

    #[error("Non-numeric value found at row {row}, column {column}: '{value}'")]
    NonNumericCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Criterion column {column} ('{header}') contains only zeros and cannot be normalized.")]
    ZeroNormColumn { column: usize, header: String },
}

impl TopsisError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TopsisError::InvalidWeight { .. } | TopsisError::InvalidImpact { .. } => {
                ErrorKind::ParseError
            }
            TopsisError::WeightImpactCountMismatch { .. }
            | TopsisError::CriteriaCountMismatch { .. }
            | TopsisError::RaggedRow { .. } => ErrorKind::ShapeMismatch,
            TopsisError::TooFewRows { .. } | TopsisError::TooFewColumns { .. } => {
                ErrorKind::ShapeTooSmall
            }
            TopsisError::NonNumericCell { .. } => ErrorKind::NonNumericCell,
            TopsisError::ZeroNormColumn { .. } => ErrorKind::DegenerateInput,
        }
    }
}
