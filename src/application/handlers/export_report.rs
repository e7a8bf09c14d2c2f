//! ExportReportHandler - Computes, builds and renders a downloadable report.
//!
//! The handler recomputes figures from the submitted inputs rather than
//! trusting client-side totals, so a report always agrees with the API.

use std::sync::Arc;

use crate::domain::assessment::{CurrentStateAnalysis, FutureStateAnalysis};
use crate::domain::financial::{
    FinancialAnalysisInput, ProcessRoiCalculator, ProcessRoiInput, QuickRoiCalculator,
    QuickRoiInput, RoiCalculator,
};
use crate::domain::foundation::Timestamp;
use crate::domain::report::{Report, ReportBuilder, ReportKind};
use crate::domain::scoring::ScoreCalculator;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExportService};

/// The inputs of one report, tagged by kind.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum ReportRequest {
    CurrentAssessment(CurrentStateAnalysis),
    FutureAssessment(FutureStateAnalysis),
    FinancialAnalysis(FinancialAnalysisInput),
    QuickRoi(QuickRoiInput),
    ProcessRoi(ProcessRoiInput),
}

impl ReportRequest {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportRequest::CurrentAssessment(_) => ReportKind::CurrentAssessment,
            ReportRequest::FutureAssessment(_) => ReportKind::FutureAssessment,
            ReportRequest::FinancialAnalysis(_) => ReportKind::FinancialAnalysis,
            ReportRequest::QuickRoi(_) => ReportKind::QuickRoi,
            ReportRequest::ProcessRoi(_) => ReportKind::ProcessRoi,
        }
    }
}

/// Command to export a report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub request: ReportRequest,
    pub format: ExportFormat,
    /// Stamped into the header and the filename.
    pub generated_at: Timestamp,
}

/// Handler for report export.
pub struct ExportReportHandler {
    scoring: Arc<ScoreCalculator>,
    quick_roi: Arc<QuickRoiCalculator>,
    builder: Arc<ReportBuilder>,
    exporter: Arc<dyn ReportExportService>,
}

impl ExportReportHandler {
    pub fn new(
        scoring: Arc<ScoreCalculator>,
        quick_roi: Arc<QuickRoiCalculator>,
        builder: Arc<ReportBuilder>,
        exporter: Arc<dyn ReportExportService>,
    ) -> Self {
        Self {
            scoring,
            quick_roi,
            builder,
            exporter,
        }
    }

    /// Builds the format-neutral report for a request.
    pub fn build_report(&self, request: &ReportRequest, generated_at: Timestamp) -> Report {
        match request {
            ReportRequest::CurrentAssessment(analysis) => {
                let breakdown = self.scoring.score_current(analysis);
                self.builder
                    .current_assessment(analysis, &breakdown, generated_at)
            }
            ReportRequest::FutureAssessment(analysis) => {
                let breakdown = self.scoring.score_future(analysis);
                self.builder
                    .future_assessment(analysis, &breakdown, generated_at)
            }
            ReportRequest::FinancialAnalysis(input) => {
                let metrics = RoiCalculator::analyze(input);
                self.builder
                    .financial_analysis(input, &metrics, generated_at)
            }
            ReportRequest::QuickRoi(input) => {
                let metrics = self.quick_roi.calculate(input);
                self.builder.quick_roi(input, &metrics, generated_at)
            }
            ReportRequest::ProcessRoi(input) => {
                let metrics = ProcessRoiCalculator::calculate(input);
                self.builder.process_roi(input, &metrics, generated_at)
            }
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(kind = %cmd.request.kind(), format = %cmd.format))]
    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportedReport, ExportError> {
        let report = self.build_report(&cmd.request, cmd.generated_at);

        match self.exporter.export(&report, cmd.format).await {
            Ok(exported) => {
                tracing::info!(filename = %exported.filename, "Report exported");
                Ok(exported)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Report export failed");
                Err(err)
            }
        }
    }
}
