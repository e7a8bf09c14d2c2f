//! ScoreAssessmentHandler - Scores current- and future-state questionnaires.

use std::sync::Arc;

use crate::domain::assessment::{CurrentStateAnalysis, FutureStateAnalysis};
use crate::domain::scoring::{ScoreBreakdown, ScoreCalculator};

/// Command to score a current-state questionnaire.
#[derive(Debug, Clone)]
pub struct ScoreCurrentStateCommand {
    pub analysis: CurrentStateAnalysis,
}

/// Command to score a future-state questionnaire.
#[derive(Debug, Clone)]
pub struct ScoreFutureStateCommand {
    pub analysis: FutureStateAnalysis,
}

/// Handler for both assessment kinds. Scoring cannot fail.
pub struct ScoreAssessmentHandler {
    calculator: Arc<ScoreCalculator>,
}

impl ScoreAssessmentHandler {
    pub fn new(calculator: Arc<ScoreCalculator>) -> Self {
        Self { calculator }
    }

    pub fn handle_current(&self, cmd: ScoreCurrentStateCommand) -> ScoreBreakdown {
        let breakdown = self.calculator.score_current(&cmd.analysis);
        tracing::info!(
            total = breakdown.total,
            max_total = breakdown.max_total,
            outcome = %breakdown.outcome,
            "Current state scored"
        );
        breakdown
    }

    pub fn handle_future(&self, cmd: ScoreFutureStateCommand) -> ScoreBreakdown {
        let breakdown = self.calculator.score_future(&cmd.analysis);
        tracing::info!(
            total = breakdown.total,
            max_total = breakdown.max_total,
            outcome = %breakdown.outcome,
            "Future state scored"
        );
        breakdown
    }
}
