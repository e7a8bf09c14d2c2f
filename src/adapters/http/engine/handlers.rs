//! HTTP handlers for the scoring, ROI and report endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::adapters::document::PulldownExportService;
use crate::application::handlers::{
    AnalyzeFinancialsCommand, AnalyzeFinancialsHandler, CalculateProcessRoiCommand,
    CalculateProcessRoiHandler, CalculateQuickRoiCommand, CalculateQuickRoiHandler,
    ExportReportCommand, ExportReportHandler, ReportRequest, ScoreAssessmentHandler,
    ScoreCurrentStateCommand, ScoreFutureStateCommand,
};
use crate::config::AppConfig;
use crate::domain::assessment::{CurrentStateAnalysis, FutureStateAnalysis};
use crate::domain::financial::{
    FinancialAnalysisInput, FinancialMetrics, ProcessRoiInput, ProcessRoiMetrics,
    QuickRoiCalculator, QuickRoiInput, QuickRoiMetrics,
};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::report::{ReportBuilder, ReportKind};
use crate::domain::scoring::{ScoreBreakdown, ScoreCalculator};
use crate::ports::{ExportError, ExportFormat, ReportExportService};

use super::dto::{ErrorResponse, HealthResponse, ReportQuery, DEFAULT_REPORT_FORMAT};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// API error that implements IntoResponse.
///
/// The HTTP status is derived from the error code. Messages of 500 responses
/// are replaced with a generic one unless verbose errors are enabled.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    expose_internal: bool,
}

impl ApiError {
    pub fn new(error: DomainError) -> Self {
        Self {
            error,
            expose_internal: false,
        }
    }

    pub fn exposing_internal(mut self, expose: bool) -> Self {
        self.expose_internal = expose;
        self
    }

    pub fn error(&self) -> &DomainError {
        &self.error
    }

    pub fn status(&self) -> StatusCode {
        match self.error.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::UnsupportedReport => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ExportUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::ExportFailed | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %self.error.code, message = %self.error.message, "Request failed");
            if self.expose_internal {
                ErrorResponse::from(&self.error)
            } else {
                ErrorResponse::internal("Internal server error")
            }
        } else {
            tracing::debug!(code = %self.error.code, message = %self.error.message, "Request rejected");
            ErrorResponse::from(&self.error)
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        let message = error.to_string();
        let domain = match error {
            ExportError::UnsupportedFormat(format) => {
                DomainError::new(ErrorCode::UnsupportedReport, message).with_detail("format", format)
            }
            ExportError::ServiceUnavailable(_) => {
                DomainError::new(ErrorCode::ExportUnavailable, message)
            }
            ExportError::Timeout(secs) => DomainError::new(ErrorCode::ExportFailed, message)
                .with_detail("timeoutSecs", secs.to_string()),
            ExportError::PdfConversionFailed(_) | ExportError::CsvRenderingFailed(_) => {
                DomainError::new(ErrorCode::ExportFailed, message)
            }
        };
        Self::new(domain)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state. Everything is immutable after startup.
#[derive(Clone)]
pub struct EngineAppState {
    pub scoring: Arc<ScoreCalculator>,
    pub quick_roi: Arc<QuickRoiCalculator>,
    pub report_builder: Arc<ReportBuilder>,
    pub exporter: Arc<dyn ReportExportService>,
    pub verbose_errors: bool,
}

impl EngineAppState {
    pub fn new(
        scoring: ScoreCalculator,
        quick_roi: QuickRoiCalculator,
        report_builder: ReportBuilder,
        exporter: Arc<dyn ReportExportService>,
    ) -> Self {
        Self {
            scoring: Arc::new(scoring),
            quick_roi: Arc::new(quick_roi),
            report_builder: Arc::new(report_builder),
            exporter,
            verbose_errors: false,
        }
    }

    /// Wires the engine and the Pandoc-backed exporter from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut exporter = PulldownExportService::new()
            .with_pdf_timeout(config.report.pdf_timeout_secs)
            .with_pdf_enabled(config.features.enable_pdf_export);
        if let Some(path) = &config.report.pandoc_path {
            exporter = exporter.with_pandoc_path(path.clone());
        }

        let mut state = Self::new(
            ScoreCalculator::new(config.scoring.clone()),
            QuickRoiCalculator::new(config.roi.efficiency_base),
            ReportBuilder::new(config.report.placeholder.clone()),
            Arc::new(exporter),
        );
        state.verbose_errors = config.features.verbose_errors;
        state
    }

    pub fn score_handler(&self) -> ScoreAssessmentHandler {
        ScoreAssessmentHandler::new(self.scoring.clone())
    }

    pub fn quick_roi_handler(&self) -> CalculateQuickRoiHandler {
        CalculateQuickRoiHandler::new(self.quick_roi.clone())
    }

    pub fn export_report_handler(&self) -> ExportReportHandler {
        ExportReportHandler::new(
            self.scoring.clone(),
            self.quick_roi.clone(),
            self.report_builder.clone(),
            self.exporter.clone(),
        )
    }

    fn error(&self, error: impl Into<ApiError>) -> ApiError {
        error.into().exposing_internal(self.verbose_errors)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<EngineAppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.exporter.is_pdf_available().await))
}

/// POST /api/assessments/current/score
pub async fn score_current(
    State(state): State<EngineAppState>,
    payload: Result<Json<CurrentStateAnalysis>, JsonRejection>,
) -> Result<Json<ScoreBreakdown>, ApiError> {
    let Json(analysis) = payload.map_err(|e| state.error(e))?;
    let breakdown = state
        .score_handler()
        .handle_current(ScoreCurrentStateCommand { analysis });
    Ok(Json(breakdown))
}

/// POST /api/assessments/future/score
pub async fn score_future(
    State(state): State<EngineAppState>,
    payload: Result<Json<FutureStateAnalysis>, JsonRejection>,
) -> Result<Json<ScoreBreakdown>, ApiError> {
    let Json(analysis) = payload.map_err(|e| state.error(e))?;
    let breakdown = state
        .score_handler()
        .handle_future(ScoreFutureStateCommand { analysis });
    Ok(Json(breakdown))
}

/// POST /api/financials/analysis
pub async fn analyze_financials(
    State(state): State<EngineAppState>,
    payload: Result<Json<FinancialAnalysisInput>, JsonRejection>,
) -> Result<Json<FinancialMetrics>, ApiError> {
    let Json(input) = payload.map_err(|e| state.error(e))?;
    let metrics = AnalyzeFinancialsHandler::new().handle(AnalyzeFinancialsCommand { input });
    Ok(Json(metrics))
}

/// POST /api/roi/quick
pub async fn quick_roi(
    State(state): State<EngineAppState>,
    payload: Result<Json<QuickRoiInput>, JsonRejection>,
) -> Result<Json<QuickRoiMetrics>, ApiError> {
    let Json(input) = payload.map_err(|e| state.error(e))?;
    let metrics = state
        .quick_roi_handler()
        .handle(CalculateQuickRoiCommand { input });
    Ok(Json(metrics))
}

/// POST /api/roi/process
pub async fn process_roi(
    State(state): State<EngineAppState>,
    payload: Result<Json<ProcessRoiInput>, JsonRejection>,
) -> Result<Json<ProcessRoiMetrics>, ApiError> {
    let Json(input) = payload.map_err(|e| state.error(e))?;
    let metrics = CalculateProcessRoiHandler::new().handle(CalculateProcessRoiCommand { input });
    Ok(Json(metrics))
}

/// POST /api/reports/:kind?format=text|csv|markdown|html|pdf
///
/// The body is the input record for `kind`; an empty body means all defaults.
/// Responds with the rendered file as an attachment.
pub async fn export_report(
    State(state): State<EngineAppState>,
    Path(raw_kind): Path<String>,
    Query(query): Query<ReportQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let kind = raw_kind.parse::<ReportKind>().map_err(|e| {
        state.error(
            DomainError::new(ErrorCode::UnsupportedReport, e.to_string())
                .with_detail("kind", raw_kind.clone()),
        )
    })?;
    let format = match query.format_or_default() {
        Some(raw) => raw.parse::<ExportFormat>().map_err(|e| state.error(e))?,
        None => DEFAULT_REPORT_FORMAT,
    };
    let request = parse_report_request(kind, &body).map_err(|e| state.error(e))?;

    let exported = state
        .export_report_handler()
        .handle(ExportReportCommand {
            request,
            format,
            generated_at: Timestamp::now(),
        })
        .await
        .map_err(|e| state.error(e))?;

    let disposition = format!("attachment; filename=\"{}\"", exported.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, exported.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        exported.content,
    )
        .into_response())
}

fn parse_report_request(kind: ReportKind, body: &[u8]) -> Result<ReportRequest, DomainError> {
    Ok(match kind {
        ReportKind::CurrentAssessment => ReportRequest::CurrentAssessment(parse_body(body)?),
        ReportKind::FutureAssessment => ReportRequest::FutureAssessment(parse_body(body)?),
        ReportKind::FinancialAnalysis => ReportRequest::FinancialAnalysis(parse_body(body)?),
        ReportKind::QuickRoi => ReportRequest::QuickRoi(parse_body(body)?),
        ReportKind::ProcessRoi => ReportRequest::ProcessRoi(parse_body(body)?),
    })
}

fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, DomainError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Failed to deserialize the JSON body: {}", e),
        )
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
