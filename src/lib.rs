//! TOPSIS Rank - Multi-criteria decision ranking
//!
//! This crate scores and ranks alternatives with TOPSIS (Technique for Order
//! Preference by Similarity to Ideal Solution): given a table of
//! alternatives scored on several criteria, per-criterion weights and
//! benefit/cost directions, it returns every alternative with a closeness
//! score and a rank.
//!
//! ```
//! use topsis_rank::domain::topsis::{validate_and_rank, RawTable};
//!
//! let table = RawTable::from_rows(vec![
//!     vec!["Name", "C1", "C2"],
//!     vec!["A", "1", "1"],
//!     vec!["B", "2", "2"],
//!     vec!["C", "3", "3"],
//! ]);
//!
//! let result = validate_and_rank(&table, "1,1", "+,+").unwrap();
//! assert_eq!(result.best().unwrap().identifier(), "C");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
