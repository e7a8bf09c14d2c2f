//! Score Calculator - category aggregation and outcome classification.

use crate::domain::assessment::{
    CurrentStateAnalysis, FutureProductivity, FutureStateAnalysis, LikertCategory,
    ObservationCategory, ProductivityMetrics,
};

use super::breakdown::{AssessmentKind, CategoryScore, ScoreBreakdown};
use super::rules::ScoringRules;

/// `(key, label, dashboard maximum)` for each current-state category.
pub const CURRENT_CATEGORIES: [(&str, &str, u32); 7] = [
    ("technologySystems", "Technology Systems", 40),
    ("workforceSkills", "Workforce Skills", 15),
    ("painPoints", "Pain Points", 70),
    ("productivityMetrics", "Productivity Metrics", 17),
    ("automationPotential", "Automation Potential", 25),
    ("dataReadiness", "Data Readiness", 20),
    ("strategicAlignment", "Strategic Alignment", 20),
];

/// `(key, label, dashboard maximum)` for each future-state category.
pub const FUTURE_CATEGORIES: [(&str, &str, u32); 7] = [
    ("technologyRoadmap", "Technology Roadmap", 40),
    ("futureWorkforce", "Future Workforce", 20),
    ("businessImpact", "Business Impact", 60),
    ("futureProductivity", "Future Productivity", 17),
    ("implementationStrategy", "Implementation Strategy", 25),
    ("investmentPlanning", "Investment Planning", 20),
    ("riskManagement", "Risk Management", 20),
];

/// Scores questionnaires against a set of [`ScoringRules`].
///
/// Scoring is total: every input record is fully defaulted, so there are no
/// error paths. Two calls with the same input produce identical breakdowns.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    rules: ScoringRules,
}

impl ScoreCalculator {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Current productivity subtotal.
    ///
    /// # Algorithm
    /// `currentSystem + qualitativeImpact + tier(errorRate) +
    /// tier(avgTimePerStep) + tier(processFrequency)`
    pub fn current_productivity(&self, metrics: &ProductivityMetrics) -> u32 {
        u32::from(metrics.current_system.value())
            + u32::from(metrics.qualitative_impact.value())
            + self.rules.error_rate.points(metrics.error_rate)
            + self.rules.avg_time_per_step.points(metrics.avg_time_per_step)
            + self.rules.process_frequency.points(metrics.process_frequency)
    }

    /// Future productivity subtotal.
    ///
    /// # Algorithm
    /// `futureSystemCapabilities + scalabilityPlanning + tier(automationROI) +
    /// tier(targetOutputIncrease) + tier(expectedMonthlySavings)`
    pub fn future_productivity(&self, productivity: &FutureProductivity) -> u32 {
        u32::from(productivity.future_system_capabilities.value())
            + u32::from(productivity.scalability_planning.value())
            + self.rules.automation_roi.points(productivity.automation_roi)
            + self
                .rules
                .target_output_increase
                .points(productivity.target_output_increase)
            + self
                .rules
                .expected_monthly_savings
                .points(productivity.expected_monthly_savings)
    }

    /// Scores a current-state questionnaire.
    pub fn score_current(&self, analysis: &CurrentStateAnalysis) -> ScoreBreakdown {
        let subtotals = [
            analysis.technology_systems.subtotal(),
            analysis.workforce_skills.subtotal(),
            analysis.pain_points.subtotal(),
            self.current_productivity(&analysis.productivity_metrics),
            analysis.automation_potential.subtotal(),
            analysis.data_readiness.subtotal(),
            analysis.strategic_alignment.subtotal(),
        ];
        ScoreBreakdown::from_categories(
            AssessmentKind::Current,
            Self::categories(&CURRENT_CATEGORIES, subtotals),
            &self.rules.current_outcomes,
        )
    }

    /// Scores a future-state questionnaire.
    pub fn score_future(&self, analysis: &FutureStateAnalysis) -> ScoreBreakdown {
        let subtotals = [
            analysis.technology_roadmap.subtotal(),
            analysis.future_workforce.subtotal(),
            analysis.business_impact.subtotal(),
            self.future_productivity(&analysis.future_productivity),
            analysis.implementation_strategy.subtotal(),
            analysis.investment_planning.subtotal(),
            analysis.risk_management.subtotal(),
        ];
        ScoreBreakdown::from_categories(
            AssessmentKind::Future,
            Self::categories(&FUTURE_CATEGORIES, subtotals),
            &self.rules.future_outcomes,
        )
    }

    fn categories(layout: &[(&str, &str, u32); 7], subtotals: [u32; 7]) -> Vec<CategoryScore> {
        layout
            .iter()
            .zip(subtotals)
            .map(|(&(key, label, max), score)| CategoryScore::new(key, label, score, max))
            .collect()
    }
}
