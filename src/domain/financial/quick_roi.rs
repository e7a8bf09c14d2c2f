//! Quick ROI - the four-figure estimate (cost, quality, efficiency, investment).

use serde::{Deserialize, Serialize};

use super::roi_calculator::{finite_or_zero, MONTHS_PER_YEAR};

/// Monthly revenue base the efficiency gain percentage is applied to.
pub const DEFAULT_EFFICIENCY_BASE: f64 = 100_000.0;

/// A before/after pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentFuture {
    pub current: f64,
    pub future: f64,
}

impl CurrentFuture {
    pub const fn new(current: f64, future: f64) -> Self {
        Self { current, future }
    }

    /// `current - future`
    pub fn reduction(&self) -> f64 {
        self.current - self.future
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickRoiInput {
    /// Monthly operating cost.
    pub cost_reduction: CurrentFuture,
    /// Monthly cost of quality defects.
    pub quality_defects: CurrentFuture,
    /// Efficiency score, e.g. percent of capacity.
    pub efficiency: CurrentFuture,
    pub initial_investment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRoiMetrics {
    pub cost_reduction_savings: f64,
    pub quality_improvement_savings: f64,
    pub efficiency_gain_percent: f64,
    pub efficiency_improvement_earnings: f64,
    pub total_monthly_gain: f64,
    pub total_annual_gain: f64,
    pub payback_period_months: f64,
    #[serde(rename = "roi")]
    pub roi_percent: f64,
}

/// Quick ROI calculations against a configurable efficiency base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickRoiCalculator {
    efficiency_base: f64,
}

impl Default for QuickRoiCalculator {
    fn default() -> Self {
        Self {
            efficiency_base: DEFAULT_EFFICIENCY_BASE,
        }
    }
}

impl QuickRoiCalculator {
    pub fn new(efficiency_base: f64) -> Self {
        Self { efficiency_base }
    }

    pub fn efficiency_base(&self) -> f64 {
        self.efficiency_base
    }

    /// `(future - current) / current * 100`, or 0 when current is 0.
    pub fn efficiency_gain_percent(efficiency: &CurrentFuture) -> f64 {
        if efficiency.current == 0.0 {
            return 0.0;
        }
        finite_or_zero((efficiency.future - efficiency.current) / efficiency.current * 100.0)
    }

    /// Computes the quick ROI metrics.
    ///
    /// # Edge Cases
    /// - Payback is 0 unless investment and monthly gain are both positive
    /// - ROI is 0 unless investment is positive
    pub fn calculate(&self, input: &QuickRoiInput) -> QuickRoiMetrics {
        let cost_reduction_savings = finite_or_zero(input.cost_reduction.reduction());
        let quality_improvement_savings = finite_or_zero(input.quality_defects.reduction());
        let efficiency_gain_percent = Self::efficiency_gain_percent(&input.efficiency);
        let efficiency_improvement_earnings =
            finite_or_zero(efficiency_gain_percent / 100.0 * self.efficiency_base);

        let total_monthly_gain = finite_or_zero(
            cost_reduction_savings + quality_improvement_savings + efficiency_improvement_earnings,
        );
        let total_annual_gain = finite_or_zero(total_monthly_gain * MONTHS_PER_YEAR);
        let investment = input.initial_investment;

        let payback_period_months = if investment > 0.0 && total_monthly_gain > 0.0 {
            finite_or_zero(investment / total_monthly_gain)
        } else {
            0.0
        };
        let roi_percent = if investment > 0.0 {
            finite_or_zero((total_annual_gain - investment) / investment * 100.0)
        } else {
            0.0
        };

        QuickRoiMetrics {
            cost_reduction_savings,
            quality_improvement_savings,
            efficiency_gain_percent,
            efficiency_improvement_earnings,
            total_monthly_gain,
            total_annual_gain,
            payback_period_months,
            roi_percent,
        }
    }
}
