//! Domain layer containing the assessment scoring and ROI engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (Likert scores, IDs, timestamps, errors)
//! - `assessment` - Current- and future-state questionnaire records
//! - `scoring` - Category aggregation, bands and outcome classification
//! - `financial` - Savings, ROI, payback and custom formula sections
//! - `report` - Format-neutral report structures and builders
//!
//! Everything here is synchronous and free of I/O.

pub mod assessment;
pub mod financial;
pub mod foundation;
pub mod report;
pub mod scoring;
