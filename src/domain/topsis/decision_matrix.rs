//! Decision Matrix and Weight Vector - Typed inputs of the TOPSIS engine.

use serde::{Deserialize, Serialize};

use super::TopsisError;

/// N alternatives x M criteria of real numbers.
///
/// Rows are alternatives in input order; a row's index is the
/// alternative's identity for the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl DecisionMatrix {
    /// Creates a matrix, checking it is non-empty and rectangular.
    ///
    /// # Errors
    /// - `TooFewRows` when there are no rows
    /// - `TooFewColumns` when the first row has no values
    /// - `RaggedRow` when a row's length differs from the first row's
    ///
    /// Row `i` is reported as it would appear in the source table: below a
    /// header row, with the identifier cell counted in its width.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let criteria = match rows.first() {
            Some(first) => first.len(),
            None => return Err(TopsisError::TooFewRows { rows: 0 }),
        };

        if criteria == 0 {
            return Err(TopsisError::TooFewColumns { columns: 0 });
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != criteria) {
            return Err(TopsisError::RaggedRow {
                row: i + 2,
                expected: criteria + 1,
                actual: row.len() + 1,
            });
        }

        Ok(Self { rows, criteria })
    }

    /// Number of alternatives (N).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (M).
    pub fn criteria_count(&self) -> usize {
        self.criteria
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Iterates over column `j` top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(j).copied())
    }
}

/// Per-criterion weights.
///
/// Zero weights nullify a criterion and negative weights invert it; both are
/// accepted as the caller's choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector from values.
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Parses a comma-separated specification such as `"1,1,1,2"`.
    ///
    /// Tokens are trimmed. Empty tokens, non-numbers and non-finite values
    /// are rejected with their 1-based position.
    pub fn parse(spec: &str) -> Result<Self, TopsisError> {
        spec.split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, token)| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or_else(|| TopsisError::InvalidWeight {
                        position: i + 1,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
