//! Ranked Result - Scored rows ready for tabular rendering.

use serde::{Deserialize, Serialize};

use super::{RawTable, TopsisOutcome};

/// Default header appended for the score column.
pub const DEFAULT_SCORE_HEADER: &str = "Topsis Score";

/// Default header appended for the rank column.
pub const DEFAULT_RANK_HEADER: &str = "Rank";

/// Default decimal places of the displayed score.
pub const DEFAULT_SCORE_DECIMALS: usize = 4;

/// One alternative with its original cells, score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// Identifier and raw criterion cells, exactly as supplied.
    pub cells: Vec<String>,
    /// Full-precision closeness score.
    pub score: f64,
    /// Score rounded for display, e.g. `"0.5573"`.
    pub score_display: String,
    /// 1 is best.
    pub rank: usize,
}

impl RankedRow {
    /// Returns the identifier cell.
    pub fn identifier(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    /// Original cells followed by the score and rank.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = self.cells.clone();
        cells.push(self.score_display.clone());
        cells.push(self.rank.to_string());
        cells
    }
}

/// TOPSIS output in input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Original headers plus the score and rank headers.
    pub headers: Vec<String>,
    pub rows: Vec<RankedRow>,
}

impl RankedResult {
    /// Attaches engine output to the table it was computed from.
    ///
    /// `outcome` must come from this table's records, in the same order.
    pub fn assemble(
        table: &RawTable,
        outcome: &TopsisOutcome,
        score_decimals: usize,
        score_header: &str,
        rank_header: &str,
    ) -> Self {
        let mut headers = table.header().to_vec();
        headers.push(score_header.to_string());
        headers.push(rank_header.to_string());

        let rows = table
            .records()
            .iter()
            .zip(outcome.scores.iter().zip(&outcome.ranks))
            .map(|(record, (&score, &rank))| RankedRow {
                cells: record.clone(),
                score,
                score_display: format_score(score, score_decimals),
                rank,
            })
            .collect();

        Self { headers, rows }
    }

    /// The header row for rendering.
    pub fn header_row(&self) -> &[String] {
        &self.headers
    }

    /// The rank-1 alternative.
    pub fn best(&self) -> Option<&RankedRow> {
        self.rows.iter().find(|r| r.rank == 1)
    }

    /// Rows sorted by rank, best first.
    pub fn by_rank(&self) -> Vec<&RankedRow> {
        let mut rows: Vec<&RankedRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.rank);
        rows
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats a score with a fixed number of decimals.
///
/// A value exactly halfway between two displayable numbers rounds away from
/// zero, so 0.03125 shows as "0.0313" at 4 decimals. Every other value rounds
/// to the nearest displayable number.
pub fn format_score(score: f64, decimals: usize) -> String {
    let value = if is_rounding_tie(score, decimals) {
        // next representable value away from zero
        f64::from_bits(score.to_bits() + 1)
    } else {
        score
    };
    format!("{:.*}", decimals, value)
}

/// True when `value * 10^decimals` ends in exactly `.5`.
fn is_rounding_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    // value = mantissa * 2^exponent
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    // 2 * value * 10^decimals is an odd integer exactly when the powers of
    // two cancel out
    i64::from(mantissa.trailing_zeros()) + exponent + 1 + decimals as i64 == 0
}
