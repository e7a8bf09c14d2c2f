//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AnalyzeFinancialsCommand, AnalyzeFinancialsHandler, CalculateProcessRoiCommand,
    CalculateProcessRoiHandler, CalculateQuickRoiCommand, CalculateQuickRoiHandler,
    ExportReportCommand, ExportReportHandler, ReportRequest, ScoreAssessmentHandler,
    ScoreCurrentStateCommand, ScoreFutureStateCommand,
};
