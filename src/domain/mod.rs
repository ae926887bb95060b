//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary for the application layer
//! - `topsis` - Pure TOPSIS ranking (validation, engine, ranked result)

pub mod foundation;
pub mod topsis;
