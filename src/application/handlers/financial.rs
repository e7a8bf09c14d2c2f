//! Financial handlers - consolidated analysis, quick ROI and process ROI.

use std::sync::Arc;

use crate::domain::financial::{
    FinancialAnalysisInput, FinancialMetrics, ProcessRoiCalculator, ProcessRoiInput,
    ProcessRoiMetrics, QuickRoiCalculator, QuickRoiInput, QuickRoiMetrics, RoiCalculator,
};

/// Command to run the consolidated current/future financial analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeFinancialsCommand {
    pub input: FinancialAnalysisInput,
}

/// Handler for the consolidated analysis.
///
/// Formula failures never fail the command; they are returned inside
/// [`FinancialMetrics::formula_errors`] and logged at warn level.
#[derive(Debug, Default)]
pub struct AnalyzeFinancialsHandler;

impl AnalyzeFinancialsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: AnalyzeFinancialsCommand) -> FinancialMetrics {
        let metrics = RoiCalculator::analyze(&cmd.input);

        for issue in &metrics.formula_errors {
            tracing::warn!(
                section = %issue.section_name,
                side = %issue.side,
                code = %issue.code,
                "Custom section formula failed, counted as zero"
            );
        }
        tracing::info!(
            custom_sections = cmd.input.custom_sections.len(),
            roi = metrics.roi_percent,
            payback_years = metrics.payback_years,
            "Financial analysis completed"
        );

        metrics
    }
}

#[derive(Debug, Clone)]
pub struct CalculateQuickRoiCommand {
    pub input: QuickRoiInput,
}

/// Handler for the four-figure quick estimate.
pub struct CalculateQuickRoiHandler {
    calculator: Arc<QuickRoiCalculator>,
}

impl CalculateQuickRoiHandler {
    pub fn new(calculator: Arc<QuickRoiCalculator>) -> Self {
        Self { calculator }
    }

    pub fn handle(&self, cmd: CalculateQuickRoiCommand) -> QuickRoiMetrics {
        let metrics = self.calculator.calculate(&cmd.input);
        tracing::info!(
            monthly_gain = metrics.total_monthly_gain,
            roi = metrics.roi_percent,
            "Quick ROI calculated"
        );
        metrics
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalculateProcessRoiCommand {
    pub input: ProcessRoiInput,
}

#[derive(Debug, Default)]
pub struct CalculateProcessRoiHandler;

impl CalculateProcessRoiHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CalculateProcessRoiCommand) -> ProcessRoiMetrics {
        let metrics = ProcessRoiCalculator::calculate(&cmd.input);
        tracing::info!(
            roi = metrics.roi_percent,
            category = %metrics.category,
            "Process ROI calculated"
        );
        metrics
    }
}
