//! TOPSIS Engine - Closeness scores and ranks for a decision matrix.
//!
//! # Algorithm
//! 1. Vector-normalize each column by its Euclidean norm
//! 2. Multiply each column by its weight
//! 3. Pick ideal best / worst per column according to its impact
//! 4. Euclidean distance of every row to both ideal points
//! 5. score = d_worst / (d_best + d_worst)
//! 6. Rank by score descending, stable on input order
//!
//! # Degenerate Inputs
//! - A column whose norm is 0 normalizes to all zeros, so it adds nothing to
//!   either distance.
//! - A row sitting on both ideal points gets [`NEUTRAL_SCORE`].
//!
//! # Numeric Range
//! Every Euclidean norm is taken over values divided by their largest
//! magnitude, so squaring never overflows or underflows for finite input.
//! Weights are divided by their largest magnitude before use; closeness is
//! unchanged by a common positive factor on the weights. Scores are always
//! finite and in [0, 1].

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, ImpactVector, WeightVector};

/// Score assigned when both distances are zero.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Ideal best and worst value for every criterion, in weighted space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Full-precision engine output, indexed by input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Closeness score per alternative, in [0, 1].
    pub scores: Vec<f64>,
    /// Rank per alternative; 1 is best, a permutation of 1..=N.
    pub ranks: Vec<usize>,
    /// Ideal points the distances were measured against, with weights
    /// rescaled so the largest magnitude is 1.
    pub ideal: IdealPoints,
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Runs the whole pipeline.
    ///
    /// Inputs are expected to satisfy the validator's postconditions:
    /// weights and impacts have one entry per matrix column.
    pub fn evaluate(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> TopsisOutcome {
        let normalized = Self::normalize(matrix);
        let weighted = Self::apply_weights(&normalized, &Self::unit_weights(weights));
        let ideal = Self::ideal_points(&weighted, impacts);

        let dist_best = Self::distances(&weighted, &ideal.best);
        let dist_worst = Self::distances(&weighted, &ideal.worst);

        let scores: Vec<f64> = dist_best
            .iter()
            .zip(&dist_worst)
            .map(|(&best, &worst)| Self::closeness(best, worst))
            .collect();
        let ranks = Self::assign_ranks(&scores);

        TopsisOutcome {
            scores,
            ranks,
            ideal,
        }
    }

    /// Largest magnitude in column `j`; 0 exactly when the column is all zeros.
    pub fn column_scale(matrix: &DecisionMatrix, j: usize) -> f64 {
        max_magnitude(matrix.column(j))
    }

    /// True when column `j` has a zero norm and normalizes to all zeros.
    pub fn is_zero_norm_column(matrix: &DecisionMatrix, j: usize) -> bool {
        Self::column_scale(matrix, j) == 0.0
    }

    /// Euclidean norm of every column.
    ///
    /// Saturates to infinity only when the true norm exceeds `f64::MAX`;
    /// [`normalize`](Self::normalize) does not divide by this value.
    pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
        (0..matrix.criteria_count())
            .map(|j| {
                let scale = Self::column_scale(matrix, j);
                scale * scaled_norm(matrix.column(j), scale)
            })
            .collect()
    }

    /// Divides every entry by its column norm.
    pub fn normalize(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        // (scale, norm of column / scale) per column
        let factors: Vec<(f64, f64)> = (0..matrix.criteria_count())
            .map(|j| {
                let scale = Self::column_scale(matrix, j);
                (scale, scaled_norm(matrix.column(j), scale))
            })
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&factors)
                    .map(|(&v, &(scale, norm))| {
                        if scale == 0.0 {
                            0.0
                        } else {
                            (v / scale) / norm
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Divides every weight by the largest weight magnitude.
    ///
    /// All-zero weights are returned unchanged.
    pub fn unit_weights(weights: &WeightVector) -> WeightVector {
        let scale = max_magnitude(weights.as_slice().iter().copied());
        if scale == 0.0 {
            return weights.clone();
        }
        WeightVector::new(weights.as_slice().iter().map(|w| w / scale).collect())
    }

    /// Multiplies each column by its weight.
    pub fn apply_weights(normalized: &[Vec<f64>], weights: &WeightVector) -> Vec<Vec<f64>> {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(v, w)| v * w)
                    .collect()
            })
            .collect()
    }

    /// Selects ideal best and worst per column.
    ///
    /// Benefit columns take best = max, worst = min; cost columns the reverse.
    pub fn ideal_points(weighted: &[Vec<f64>], impacts: &ImpactVector) -> IdealPoints {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (j, impact) in impacts.as_slice().iter().enumerate() {
            let (min, max) = weighted
                .iter()
                .filter_map(|row| row.get(j).copied())
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });

            let (b, w) = impact.ideal_pair(min, max);
            best.push(b);
            worst.push(w);
        }

        IdealPoints { best, worst }
    }

    /// Euclidean distance of every row to `ideal`.
    pub fn distances(weighted: &[Vec<f64>], ideal: &[f64]) -> Vec<f64> {
        weighted
            .iter()
            .map(|row| {
                let diffs: Vec<f64> = row.iter().zip(ideal).map(|(v, i)| v - i).collect();
                euclidean_norm(diffs.into_iter())
            })
            .collect()
    }

    /// Relative closeness to the ideal solution.
    pub fn closeness(dist_best: f64, dist_worst: f64) -> f64 {
        let total = dist_best + dist_worst;
        if total == 0.0 {
            return NEUTRAL_SCORE;
        }
        dist_worst / total
    }

    /// Ranks scores descending; equal scores keep input order.
    ///
    /// Every alternative receives a distinct rank.
    pub fn assign_ranks(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        // sort_by is stable, which is the tie-break
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut ranks = vec![0; scores.len()];
        for (position, index) in order.into_iter().enumerate() {
            ranks[index] = position + 1;
        }
        ranks
    }
}

fn max_magnitude(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |max, v| max.max(v.abs()))
}

/// Norm of `values / scale`; `scale` must be their largest magnitude.
fn scaled_norm(values: impl Iterator<Item = f64>, scale: f64) -> f64 {
    if scale == 0.0 {
        return 0.0;
    }
    values
        .map(|v| {
            let r = v / scale;
            r * r
        })
        .sum::<f64>()
        .sqrt()
}

fn euclidean_norm(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let scale = max_magnitude(values.clone());
    scale * scaled_norm(values, scale)
}

/// Runs TOPSIS on already validated inputs.
pub fn topsis(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    impacts: &ImpactVector,
) -> TopsisOutcome {
    TopsisEngine::evaluate(matrix, weights, impacts)
}
