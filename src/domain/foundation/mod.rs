//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary the application layer reports to its
//! callers.

mod errors;

pub use errors::{DomainError, ErrorCode};
