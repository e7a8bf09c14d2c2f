//! AI4Profit - AI readiness assessment scoring and ROI projection.
//!
//! This crate scores current- and future-state manufacturing questionnaires,
//! projects savings and ROI for automation, and renders the results as
//! downloadable reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
