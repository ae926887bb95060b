//! Property tests for the TOPSIS ranking invariants.
//!
//! Random decision problems are rendered to a raw string table and run
//! through the public entry point, so parsing and ranking are exercised
//! together.

use proptest::prelude::*;

use topsis_rank::domain::topsis::{
    topsis, validate_and_rank, DecisionMatrix, ImpactVector, RankedResult, RawTable,
    WeightVector,
};

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
struct Problem {
    rows: Vec<Vec<f64>>,
    weights: Vec<f64>,
    benefit: Vec<bool>,
}

impl Problem {
    fn table(&self) -> RawTable {
        let criteria = self.weights.len();
        let mut cells = vec![std::iter::once("Alternative".to_string())
            .chain((1..=criteria).map(|j| format!("C{}", j)))
            .collect::<Vec<_>>()];

        for (i, row) in self.rows.iter().enumerate() {
            cells.push(
                std::iter::once(format!("A{}", i + 1))
                    .chain(row.iter().map(|v| v.to_string()))
                    .collect(),
            );
        }
        RawTable::new(cells)
    }

    fn weights_spec(&self) -> String {
        self.weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn impacts_spec(&self) -> String {
        Self::spec_for(&self.benefit)
    }

    fn spec_for(benefit: &[bool]) -> String {
        benefit
            .iter()
            .map(|&b| if b { "+" } else { "-" })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn rank(&self) -> RankedResult {
        validate_and_rank(&self.table(), &self.weights_spec(), &self.impacts_spec())
            .expect("generated problems are valid")
    }
}

fn problem() -> impl Strategy<Value = Problem> {
    (1usize..8, 2usize..5).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(prop::collection::vec(0.1f64..100.0, m), n),
            prop::collection::vec(0.1f64..5.0, m),
            prop::collection::vec(any::<bool>(), m),
        )
            .prop_map(|(rows, weights, benefit)| Problem {
                rows,
                weights,
                benefit,
            })
    })
}

fn magnitude() -> impl Strategy<Value = f64> {
    (0.1f64..9.9, -300i32..300).prop_map(|(mantissa, exp)| mantissa * 10f64.powi(exp))
}

/// Cells and weights spread over the whole finite exponent range.
fn wide_problem() -> impl Strategy<Value = Problem> {
    (1usize..6, 2usize..5).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(prop::collection::vec(magnitude(), m), n),
            prop::collection::vec(magnitude(), m),
            prop::collection::vec(any::<bool>(), m),
        )
            .prop_map(|(rows, weights, benefit)| Problem {
                rows,
                weights,
                benefit,
            })
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn ranks_are_a_permutation(p in problem()) {
        let result = p.rank();
        prop_assert_eq!(result.len(), p.rows.len());

        let mut ranks: Vec<usize> = result.rows.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        let expected: Vec<usize> = (1..=p.rows.len()).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn scores_are_bounded(p in problem()) {
        for row in p.rank().rows {
            prop_assert!((0.0..=1.0).contains(&row.score), "score {} out of range", row.score);
        }
    }

    #[test]
    fn scores_are_bounded_at_extreme_magnitudes(p in wide_problem()) {
        let result = p.rank();
        for row in &result.rows {
            prop_assert!((0.0..=1.0).contains(&row.score), "score {} out of range", row.score);
        }

        let mut ranks: Vec<usize> = result.rows.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=p.rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn rank_order_follows_score_then_input_order(p in problem()) {
        let rows = p.rank().rows;
        for i in 0..rows.len() {
            for j in 0..rows.len() {
                if i == j {
                    continue;
                }
                let better = rows[i].score > rows[j].score
                    || (rows[i].score == rows[j].score && i < j);
                prop_assert_eq!(rows[i].rank < rows[j].rank, better);
            }
        }
    }

    #[test]
    fn rows_keep_input_order_and_cells(p in problem()) {
        let table = p.table();
        let result = p.rank();
        for (row, record) in result.rows.iter().zip(table.records()) {
            prop_assert_eq!(&row.cells, record);
        }
    }

    #[test]
    fn benefit_to_cost_never_helps_the_column_leader(p in problem(), col in 0usize..4) {
        let j = col % p.weights.len();
        let mut base = p.benefit.clone();
        base[j] = true;

        let leader = p.rows
            .iter()
            .enumerate()
            .max_by(|a, b| a.1[j].total_cmp(&b.1[j]))
            .map(|(i, _)| i)
            .unwrap();

        let before = validate_and_rank(&p.table(), &p.weights_spec(), &Problem::spec_for(&base))
            .unwrap()
            .rows[leader]
            .score;

        let mut flipped = base;
        flipped[j] = false;
        let after = validate_and_rank(&p.table(), &p.weights_spec(), &Problem::spec_for(&flipped))
            .unwrap()
            .rows[leader]
            .score;

        prop_assert!(after <= before + 1e-12, "score rose from {} to {}", before, after);
    }

    #[test]
    fn engine_is_idempotent(p in problem()) {
        let matrix = DecisionMatrix::new(p.rows.clone()).unwrap();
        let weights = WeightVector::new(p.weights.clone());
        let impacts = ImpactVector::parse(&p.impacts_spec()).unwrap();

        let first = topsis(&matrix, &weights, &impacts);
        let second = topsis(&matrix, &weights, &impacts);

        let bits = |scores: &[f64]| scores.iter().map(|s| s.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&first.scores), bits(&second.scores));
        prop_assert_eq!(first.ranks, second.ranks);
    }

    #[test]
    fn string_round_trip_matches_direct_engine(p in problem()) {
        let direct = topsis(
            &DecisionMatrix::new(p.rows.clone()).unwrap(),
            &WeightVector::new(p.weights.clone()),
            &ImpactVector::parse(&p.impacts_spec()).unwrap(),
        );
        let via_table = p.rank();

        for (row, (&score, &rank)) in via_table.rows.iter().zip(direct.scores.iter().zip(&direct.ranks)) {
            prop_assert_eq!(row.score.to_bits(), score.to_bits());
            prop_assert_eq!(row.rank, rank);
        }
    }
}
