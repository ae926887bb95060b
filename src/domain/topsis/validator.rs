//! Input Validator - The only boundary between raw strings and typed input.
//!
//! Checks run in a fixed order so the first failure reported is the one a
//! person filling in the form would hit first:
//! 1. table size (at least header + 1 row, identifier + 2 criteria)
//! 2. weight tokens, then impact tokens
//! 3. weights count vs impacts count, then vs criteria count
//! 4. every data row's width and every criterion cell
//! 5. zero-norm columns, when the policy rejects them

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, ImpactVector, RawTable, TopsisEngine, TopsisError, WeightVector};

/// Minimum table rows: header plus one alternative.
pub const MIN_ROWS: usize = 2;

/// Minimum table columns: identifier plus two criteria.
pub const MIN_COLUMNS: usize = 3;

/// What to do with a criterion whose values are all zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroNormPolicy {
    /// Accept; the column contributes nothing to either distance.
    #[default]
    Neutralize,
    /// Fail validation with `ZeroNormColumn`.
    Reject,
}

/// Typed inputs ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Validation functions for raw decision tables.
pub struct InputValidator;

impl InputValidator {
    /// Validates a raw table with weight and impact specifications.
    ///
    /// Inputs are not modified.
    pub fn validate(
        table: &RawTable,
        weights_spec: &str,
        impacts_spec: &str,
        zero_norm: ZeroNormPolicy,
    ) -> Result<ValidatedInput, TopsisError> {
        Self::check_size(table)?;

        let weights = WeightVector::parse(weights_spec)?;
        let impacts = ImpactVector::parse(impacts_spec)?;

        if weights.len() != impacts.len() {
            return Err(TopsisError::WeightImpactCountMismatch {
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        let criteria = table.column_count() - 1;
        if weights.len() != criteria {
            return Err(TopsisError::CriteriaCountMismatch {
                given: weights.len(),
                criteria,
            });
        }

        let matrix = Self::parse_matrix(table)?;

        if zero_norm == ZeroNormPolicy::Reject {
            Self::check_zero_norm(&matrix, table.header())?;
        }

        Ok(ValidatedInput {
            matrix,
            weights,
            impacts,
        })
    }

    /// Fails with `ShapeTooSmall` errors for undersized tables.
    pub fn check_size(table: &RawTable) -> Result<(), TopsisError> {
        if table.row_count() < MIN_ROWS {
            return Err(TopsisError::TooFewRows {
                rows: table.row_count(),
            });
        }
        if table.column_count() < MIN_COLUMNS {
            return Err(TopsisError::TooFewColumns {
                columns: table.column_count(),
            });
        }
        Ok(())
    }

    /// Converts every criterion cell into a number.
    ///
    /// A row with fewer cells than the header reports its first missing cell
    /// as non-numeric; a row with more cells is a `RaggedRow`.
    pub fn parse_matrix(table: &RawTable) -> Result<DecisionMatrix, TopsisError> {
        let width = table.column_count();
        let criteria = width.saturating_sub(1);
        let mut rows = Vec::with_capacity(table.records().len());

        for (i, record) in table.records().iter().enumerate() {
            // +2: header row and 1-based display
            let display_row = i + 2;

            if record.len() > width {
                return Err(TopsisError::RaggedRow {
                    row: display_row,
                    expected: width,
                    actual: record.len(),
                });
            }

            let mut values = Vec::with_capacity(criteria);
            for j in 0..criteria {
                let raw = record.get(j + 1).map(String::as_str).unwrap_or("");
                let value = Self::parse_cell(raw).ok_or_else(|| TopsisError::NonNumericCell {
                    row: display_row,
                    column: j + 2,
                    value: raw.to_string(),
                })?;
                values.push(value);
            }
            rows.push(values);
        }

        DecisionMatrix::new(rows)
    }

    /// Parses one criterion cell; surrounding whitespace is ignored.
    pub fn parse_cell(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn check_zero_norm(matrix: &DecisionMatrix, header: &[String]) -> Result<(), TopsisError> {
        for j in 0..matrix.criteria_count() {
            if TopsisEngine::is_zero_norm_column(matrix, j) {
                return Err(TopsisError::ZeroNormColumn {
                    column: j + 2,
                    header: header.get(j + 1).cloned().unwrap_or_default(),
                });
            }
        }
        Ok(())
    }
}
