//! Command handlers.
//!
//! ## Scoring
//! - `ScoreAssessmentHandler` - Scores current- and future-state questionnaires
//!
//! ## Financial
//! - `AnalyzeFinancialsHandler` - Consolidated current/future analysis
//! - `CalculateQuickRoiHandler` - Four-figure quick estimate
//! - `CalculateProcessRoiHandler` - Single-process automation ROI
//!
//! ## Reports
//! - `ExportReportHandler` - Builds and renders downloadable reports

mod export_report;
mod financial;
mod scoring;

pub use export_report::{ExportReportCommand, ExportReportHandler, ReportRequest};
pub use financial::{
    AnalyzeFinancialsCommand, AnalyzeFinancialsHandler, CalculateProcessRoiCommand,
    CalculateProcessRoiHandler, CalculateQuickRoiCommand, CalculateQuickRoiHandler,
};
pub use scoring::{ScoreAssessmentHandler, ScoreCurrentStateCommand, ScoreFutureStateCommand};
