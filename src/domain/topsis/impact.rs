//! Impact direction for a criterion (`+` benefit, `-` cost).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::TopsisError;

/// Preference direction of a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Larger values are better.
    Benefit,
    /// Smaller values are better.
    Cost,
}

impl Impact {
    /// Returns the symbol used in impact specifications.
    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

    /// Picks `(ideal_best, ideal_worst)` from a column's extremes.
    pub fn ideal_pair(&self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Impact::Benefit => (max, min),
            Impact::Cost => (min, max),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token that is neither `+` nor `-`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid impact '{0}': expected '+' or '-'")]
pub struct ParseImpactError(pub String);

impl FromStr for Impact {
    type Err = ParseImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            _ => Err(ParseImpactError(s.to_string())),
        }
    }
}

/// Ordered impact directions, one per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    /// Creates an impact vector from directions.
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses a comma-separated specification such as `"+,+,-,+"`.
    ///
    /// Tokens are trimmed; anything other than `+` or `-` (including an
    /// empty token) is rejected with its 1-based position.
    pub fn parse(spec: &str) -> Result<Self, TopsisError> {
        spec.split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, token)| {
                token
                    .parse::<Impact>()
                    .map_err(|ParseImpactError(token)| TopsisError::InvalidImpact {
                        position: i + 1,
                        token,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the number of criteria covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no impacts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the directions as a slice.
    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

}

impl fmt::Display for ImpactVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.0.iter().map(|i| i.symbol().to_string()).collect();
        write!(f, "{}", symbols.join(","))
    }
}
