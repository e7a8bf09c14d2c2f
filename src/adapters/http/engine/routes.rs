//! HTTP routes for the engine endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze_financials, export_report, health, process_roi, quick_roi, score_current,
    score_future, EngineAppState,
};

/// Creates the engine router with all routes.
pub fn engine_routes(state: EngineAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Assessments
        .route("/api/assessments/current/score", post(score_current))
        .route("/api/assessments/future/score", post(score_future))
        // Financials
        .route("/api/financials/analysis", post(analyze_financials))
        .route("/api/roi/quick", post(quick_roi))
        .route("/api/roi/process", post(process_roi))
        // POST /api/reports/:kind?format=text|csv|markdown|html|pdf
        .route("/api/reports/:kind", post(export_report))
        .with_state(state)
}
