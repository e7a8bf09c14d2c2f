//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod likert;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SectionId;
pub use likert::LikertScore;
pub use timestamp::Timestamp;
