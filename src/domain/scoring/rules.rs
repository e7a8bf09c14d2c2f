//! Scoring rules - the outcome and tier tables used by the calculator.

use serde::{Deserialize, Serialize};

use super::outcome::OutcomeTable;
use super::tiers::{TierDirection, TierTable};

/// All thresholds the score calculator consults.
///
/// Defaults reproduce the questionnaire's published scoring. Every table can be
/// replaced from configuration; tables validate their own ordering when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub current_outcomes: OutcomeTable,
    pub future_outcomes: OutcomeTable,

    pub error_rate: TierTable,
    pub avg_time_per_step: TierTable,
    pub process_frequency: TierTable,

    pub automation_roi: TierTable,
    pub target_output_increase: TierTable,
    pub expected_monthly_savings: TierTable,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            current_outcomes: OutcomeTable::current_default(),
            future_outcomes: OutcomeTable::future_default(),
            error_rate: TierTable::from_ordered(TierDirection::AtMost, &[(3.0, 5), (10.0, 3)], 1),
            avg_time_per_step: TierTable::from_ordered(
                TierDirection::AtMost,
                &[(10.0, 5), (30.0, 3)],
                1,
            ),
            process_frequency: TierTable::from_ordered(
                TierDirection::Above,
                &[(100.0, 5), (10.0, 3)],
                1,
            ),
            automation_roi: TierTable::from_ordered(
                TierDirection::Above,
                &[(200.0, 5), (100.0, 3)],
                1,
            ),
            target_output_increase: TierTable::from_ordered(
                TierDirection::Above,
                &[(50.0, 5), (20.0, 3)],
                1,
            ),
            expected_monthly_savings: TierTable::from_ordered(
                TierDirection::Above,
                &[(10000.0, 5), (5000.0, 3)],
                1,
            ),
        }
    }
}
