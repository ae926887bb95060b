//! Ranking configuration

use serde::Deserialize;

use crate::domain::topsis::{
    RankingOptions, ZeroNormPolicy, DEFAULT_RANK_HEADER, DEFAULT_SCORE_DECIMALS,
    DEFAULT_SCORE_HEADER,
};

use super::error::ValidationError;

/// Upper bound on displayed score decimals
pub const MAX_SCORE_DECIMALS: usize = 10;

/// Ranking configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Decimal places of the displayed score
    #[serde(default = "default_score_decimals")]
    pub score_decimals: usize,

    /// Header appended for the score column
    #[serde(default = "default_score_header")]
    pub score_header: String,

    /// Header appended for the rank column
    #[serde(default = "default_rank_header")]
    pub rank_header: String,

    /// Handling of all-zero criterion columns
    #[serde(default)]
    pub zero_norm_policy: ZeroNormPolicy,
}

impl AnalysisConfig {
    /// Options handed to the ranking core
    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            score_decimals: self.score_decimals,
            score_header: self.score_header.clone(),
            rank_header: self.rank_header.clone(),
            zero_norm_policy: self.zero_norm_policy,
        }
    }

    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score_decimals > MAX_SCORE_DECIMALS {
            return Err(ValidationError::ScoreDecimalsTooLarge {
                max: MAX_SCORE_DECIMALS,
                actual: self.score_decimals,
            });
        }
        if self.score_header.trim().is_empty() {
            return Err(ValidationError::EmptyHeader("score_header"));
        }
        if self.rank_header.trim().is_empty() {
            return Err(ValidationError::EmptyHeader("rank_header"));
        }
        if self.score_header == self.rank_header {
            return Err(ValidationError::DuplicateHeaders);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            score_decimals: default_score_decimals(),
            score_header: default_score_header(),
            rank_header: default_rank_header(),
            zero_norm_policy: ZeroNormPolicy::default(),
        }
    }
}

fn default_score_decimals() -> usize {
    DEFAULT_SCORE_DECIMALS
}

fn default_score_header() -> String {
    DEFAULT_SCORE_HEADER.to_string()
}

fn default_rank_header() -> String {
    DEFAULT_RANK_HEADER.to_string()
}
