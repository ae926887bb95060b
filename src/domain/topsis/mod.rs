//! TOPSIS Module - Multi-criteria ranking by similarity to an ideal solution.
//!
//! # Components
//!
//! - `RawTable` - Untyped string grid from table ingestion
//! - `InputValidator` - Turns a `RawTable` plus weight/impact specs into typed input
//! - `TopsisEngine` - Pure normalize → weight → ideals → distances → score/rank
//! - `RankedResult` - Original rows with score and rank, for rendering
//!
//! # Design Philosophy
//!
//! Everything here is synchronous and side-effect free. Each call builds its
//! own inputs and returns its own output; nothing is cached between calls.

mod decision_matrix;
mod engine;
mod errors;
mod impact;
mod ranked_result;
mod raw_table;
mod validator;

pub use decision_matrix::{DecisionMatrix, WeightVector};
pub use engine::{topsis, IdealPoints, TopsisEngine, TopsisOutcome, NEUTRAL_SCORE};
pub use errors::{ErrorKind, TopsisError};
pub use impact::{Impact, ImpactVector, ParseImpactError};
pub use ranked_result::{
    format_score, RankedResult, RankedRow, DEFAULT_RANK_HEADER, DEFAULT_SCORE_DECIMALS,
    DEFAULT_SCORE_HEADER,
};
pub use raw_table::RawTable;
pub use validator::{InputValidator, ValidatedInput, ZeroNormPolicy, MIN_COLUMNS, MIN_ROWS};

use serde::{Deserialize, Serialize};

/// Presentation and degenerate-input settings for one ranking call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    pub score_decimals: usize,
    pub score_header: String,
    pub rank_header: String,
    pub zero_norm_policy: ZeroNormPolicy,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            score_decimals: DEFAULT_SCORE_DECIMALS,
            score_header: DEFAULT_SCORE_HEADER.to_string(),
            rank_header: DEFAULT_RANK_HEADER.to_string(),
            zero_norm_policy: ZeroNormPolicy::default(),
        }
    }
}

/// Validates a raw table and ranks its alternatives with default options.
///
/// `weights_spec` and `impacts_spec` are comma-separated, e.g. `"1,1,1,2"`
/// and `"+,+,-,+"`.
///
/// # Errors
///
/// Returns the first `TopsisError` found; no computation happens on
/// invalid input.
pub fn validate_and_rank(
    table: &RawTable,
    weights_spec: &str,
    impacts_spec: &str,
) -> Result<RankedResult, TopsisError> {
    validate_and_rank_with(table, weights_spec, impacts_spec, &RankingOptions::default())
}

/// Same as [`validate_and_rank`] with explicit options.
pub fn validate_and_rank_with(
    table: &RawTable,
    weights_spec: &str,
    impacts_spec: &str,
    options: &RankingOptions,
) -> Result<RankedResult, TopsisError> {
    let input = InputValidator::validate(
        table,
        weights_spec,
        impacts_spec,
        options.zero_norm_policy,
    )?;

    let outcome = topsis(&input.matrix, &input.weights, &input.impacts);

    Ok(RankedResult::assemble(
        table,
        &outcome,
        options.score_decimals,
        &options.score_header,
        &options.rank_header,
    ))
}
