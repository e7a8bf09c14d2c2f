//! Engine HTTP adapter module.
//!
//! Exposes scoring, ROI and report export over JSON.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, ReportQuery};
pub use handlers::{ApiError, EngineAppState};
pub use routes::engine_routes;
