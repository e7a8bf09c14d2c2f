//! Process ROI - time and cost savings of automating a single process.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::roi_calculator::{finite_or_zero, MONTHS_PER_YEAR};

/// Inputs describing one process before and after automation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessRoiInput {
    /// Hours per month.
    pub total_effort_per_month: f64,
    /// Cost per month.
    pub current_process_cost: f64,
    /// Minutes per instance.
    pub time_per_instance_before: f64,
    /// Minutes per instance.
    pub time_per_instance_after: f64,
    /// Hours per month.
    pub effort_after_automation: f64,
    /// Cost per month.
    pub cost_after_automation: f64,
    /// Additional revenue per month.
    pub revenue_impact: f64,
    pub capex: f64,
}

impl Default for ProcessRoiInput {
    fn default() -> Self {
        Self {
            total_effort_per_month: 160.0,
            current_process_cost: 600_000.0,
            time_per_instance_before: 120.0,
            time_per_instance_after: 30.0,
            effort_after_automation: 60.0,
            cost_after_automation: 200_000.0,
            revenue_impact: 0.0,
            capex: 0.0,
        }
    }
}

/// Qualitative rating of an ROI percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoiCategory {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl RoiCategory {
    /// `>= 150 Excellent, >= 100 Very Good, >= 51 Good, else Needs Improvement`.
    pub fn from_roi(roi_percent: f64) -> Self {
        if roi_percent >= 150.0 {
            RoiCategory::Excellent
        } else if roi_percent >= 100.0 {
            RoiCategory::VeryGood
        } else if roi_percent >= 51.0 {
            RoiCategory::Good
        } else {
            RoiCategory::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoiCategory::Excellent => "Excellent",
            RoiCategory::VeryGood => "Very Good",
            RoiCategory::Good => "Good",
            RoiCategory::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for RoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRoiMetrics {
    pub time_saved_per_instance: f64,
    pub time_saved_per_month: f64,
    pub labor_cost_savings: f64,
    pub total_monthly_gain: f64,
    pub total_annual_gain: f64,
    pub payback_period_months: f64,
    #[serde(rename = "roi")]
    pub roi_percent: f64,
    pub category: RoiCategory,
}

pub struct ProcessRoiCalculator;

impl ProcessRoiCalculator {
    /// Computes process-level ROI.
    ///
    /// # Edge Cases
    /// - Capex 0: payback and ROI are both 0
    /// - Non-positive monthly gain: payback is 0
    pub fn calculate(input: &ProcessRoiInput) -> ProcessRoiMetrics {
        let time_saved_per_instance =
            finite_or_zero(input.time_per_instance_before - input.time_per_instance_after);
        let time_saved_per_month =
            finite_or_zero(input.total_effort_per_month - input.effort_after_automation);
        let labor_cost_savings =
            finite_or_zero(input.current_process_cost - input.cost_after_automation);
        let total_monthly_gain = finite_or_zero(labor_cost_savings + input.revenue_impact);
        let total_annual_gain = finite_or_zero(total_monthly_gain * MONTHS_PER_YEAR);

        let payback_period_months = if input.capex > 0.0 && total_monthly_gain > 0.0 {
            finite_or_zero(input.capex / total_monthly_gain)
        } else {
            0.0
        };
        let roi_percent = if input.capex > 0.0 {
            finite_or_zero((total_annual_gain - input.capex) / input.capex * 100.0)
        } else {
            0.0
        };

        ProcessRoiMetrics {
            time_saved_per_instance,
            time_saved_per_month,
            labor_cost_savings,
            total_monthly_gain,
            total_annual_gain,
            payback_period_months,
            roi_percent,
            category: RoiCategory::from_roi(roi_percent),
        }
    }
}
