//! ROI Calculator - consolidated savings, ROI and payback for a financial analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::custom_section::{CustomSection, CustomSectionPair};
use super::financial_state::{FinancialAnalysisInput, FinancialState};
use crate::domain::foundation::SectionId;

/// Months per year used for every annualisation.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Returns `value` if finite, otherwise 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Which side of a custom section a formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateSide {
    Current,
    Future,
}

impl fmt::Display for StateSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateSide::Current => write!(f, "current"),
            StateSide::Future => write!(f, "future"),
        }
    }
}

/// A custom-section formula that failed and was counted as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaIssue {
    pub section_id: SectionId,
    pub section_name: String,
    pub side: StateSide,
    pub formula: String,
    pub code: String,
    pub message: String,
}

/// Evaluated figures for one custom section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSectionResult {
    pub id: SectionId,
    pub name: String,
    pub current_value: f64,
    pub future_value: f64,
    pub monthly_saving: f64,
    pub yearly_saving: f64,
}

/// Everything derived from a [`FinancialAnalysisInput`].
///
/// Monthly figures are kept alongside their yearly counterparts so reports can
/// show both. All values are finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub current_monthly_cost: f64,
    pub future_monthly_cost: f64,
    pub monthly_cost_saving: f64,
    pub cost_saving_yearly: f64,

    pub quality_defect_saving: f64,
    pub special_deduction: f64,
    pub quality_saving_yearly: f64,

    pub efficiency_saving: f64,
    pub efficiency_saving_yearly: f64,

    pub custom_sections: Vec<CustomSectionResult>,
    pub custom_saving_yearly: f64,

    pub total_annual_benefit: f64,
    pub opex_automation: f64,
    pub capex_automation: f64,
    pub total_investment: f64,
    #[serde(rename = "roi")]
    pub roi_percent: f64,
    pub payback_years: f64,
    pub payback_months: f64,

    pub formula_errors: Vec<FormulaIssue>,
}

impl FinancialMetrics {
    pub fn has_formula_errors(&self) -> bool {
        !self.formula_errors.is_empty()
    }
}

/// Consolidated financial ROI calculations.
pub struct RoiCalculator;

impl RoiCalculator {
    /// `currentTotalMonthlyCost - futureTotalMonthlyCost`
    pub fn monthly_cost_saving(current: &FinancialState, future: &FinancialState) -> f64 {
        current.cost_reduction.total_monthly_cost() - future.cost_reduction.total_monthly_cost()
    }

    /// `(currentDefects - futureDefects) * currentPerUnitCost`
    ///
    /// The special deduction is not included here.
    pub fn quality_defect_saving(current: &FinancialState, future: &FinancialState) -> f64 {
        (current.quality_defect.defects() - future.quality_defect.defects())
            * current.quality_defect.per_unit_cost
    }

    /// `(futureUnitsAfter - currentUnitsBefore) * currentContribution - futureAdditionalCost`
    pub fn efficiency_saving(current: &FinancialState, future: &FinancialState) -> f64 {
        let additional_units =
            future.efficiency.units_processed_after - current.efficiency.units_processed_before;
        additional_units * current.efficiency.contribution_per_unit
            - future.efficiency.additional_cost
    }

    /// `(benefit - investment) / investment * 100`
    ///
    /// # Edge Cases
    /// - Investment not positive: 0
    pub fn roi_percent(annual_benefit: f64, investment: f64) -> f64 {
        if investment <= 0.0 {
            return 0.0;
        }
        finite_or_zero((annual_benefit - investment) / investment * 100.0)
    }

    /// `investment / benefit`, in years.
    ///
    /// # Edge Cases
    /// - Investment or benefit not positive: 0
    pub fn payback_years(annual_benefit: f64, investment: f64) -> f64 {
        if investment <= 0.0 || annual_benefit <= 0.0 {
            return 0.0;
        }
        finite_or_zero(investment / annual_benefit)
    }

    /// Evaluates both sides of a custom section.
    ///
    /// A failing formula contributes 0 and is reported in `issues`.
    pub fn evaluate_custom_section(
        pair: &CustomSectionPair,
        issues: &mut Vec<FormulaIssue>,
    ) -> CustomSectionResult {
        let mut side_value = |section: &CustomSection, side: StateSide| match section.evaluate() {
            Ok(value) => value,
            Err(err) => {
                issues.push(FormulaIssue {
                    section_id: pair.id,
                    section_name: pair.name.clone(),
                    side,
                    formula: section.formula.clone(),
                    code: err.code().to_string(),
                    message: err.to_string(),
                });
                0.0
            }
        };

        let current_value = side_value(&pair.current, StateSide::Current);
        let future_value = side_value(&pair.future, StateSide::Future);
        let monthly_saving = finite_or_zero(current_value - future_value);

        CustomSectionResult {
            id: pair.id,
            name: pair.name.clone(),
            current_value,
            future_value,
            monthly_saving,
            yearly_saving: finite_or_zero(monthly_saving * MONTHS_PER_YEAR),
        }
    }

    /// Computes the full set of financial metrics.
    ///
    /// # Algorithm
    /// `totalAnnualBenefit = 12 * (costSaving + qualitySaving + specialDeduction
    /// + efficiencySaving) + Σ 12 * (customCurrent - customFuture)`;
    /// investment is the current side's opex + capex.
    pub fn analyze(input: &FinancialAnalysisInput) -> FinancialMetrics {
        let current = &input.current;
        let future = &input.future;

        let current_monthly_cost = current.cost_reduction.total_monthly_cost();
        let future_monthly_cost = future.cost_reduction.total_monthly_cost();
        let monthly_cost_saving = Self::monthly_cost_saving(current, future);
        let quality_defect_saving = Self::quality_defect_saving(current, future);
        let special_deduction = future.quality_defect.special_deduction;
        let efficiency_saving = Self::efficiency_saving(current, future);

        let cost_saving_yearly = monthly_cost_saving * MONTHS_PER_YEAR;
        let quality_saving_yearly = (quality_defect_saving + special_deduction) * MONTHS_PER_YEAR;
        let efficiency_saving_yearly = efficiency_saving * MONTHS_PER_YEAR;

        let mut formula_errors = Vec::new();
        let custom_sections: Vec<CustomSectionResult> = input
            .custom_sections
            .iter()
            .map(|pair| Self::evaluate_custom_section(pair, &mut formula_errors))
            .collect();
        let custom_saving_yearly: f64 = custom_sections.iter().map(|c| c.yearly_saving).sum();

        let total_annual_benefit = finite_or_zero(
            cost_saving_yearly + quality_saving_yearly + efficiency_saving_yearly + custom_saving_yearly,
        );
        let opex_automation = current.automation_metrics.opex_automation;
        let capex_automation = current.automation_metrics.capex_automation;
        let total_investment = finite_or_zero(current.automation_metrics.total_investment());

        let payback_years = Self::payback_years(total_annual_benefit, total_investment);

        FinancialMetrics {
            current_monthly_cost: finite_or_zero(current_monthly_cost),
            future_monthly_cost: finite_or_zero(future_monthly_cost),
            monthly_cost_saving: finite_or_zero(monthly_cost_saving),
            cost_saving_yearly: finite_or_zero(cost_saving_yearly),
            quality_defect_saving: finite_or_zero(quality_defect_saving),
            special_deduction: finite_or_zero(special_deduction),
            quality_saving_yearly: finite_or_zero(quality_saving_yearly),
            efficiency_saving: finite_or_zero(efficiency_saving),
            efficiency_saving_yearly: finite_or_zero(efficiency_saving_yearly),
            custom_sections,
            custom_saving_yearly: finite_or_zero(custom_saving_yearly),
            total_annual_benefit,
            opex_automation: finite_or_zero(opex_automation),
            capex_automation: finite_or_zero(capex_automation),
            total_investment,
            roi_percent: Self::roi_percent(total_annual_benefit, total_investment),
            payback_years,
            payback_months: finite_or_zero(payback_years * MONTHS_PER_YEAR),
            formula_errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::financial::{
        AutomationMetrics, CustomField, EfficiencyData, QualityDefectData,
    };
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn section(name: &str, fields: &[(&str, f64)], formula: &str) -> CustomSection {
        CustomSection::new(
            name,
            fields
                .iter()
                .map(|&(n, v)| CustomField::new(n, v))
                .collect(),
            formula,
        )
    }

    fn pair(current: CustomSection, future: CustomSection) -> CustomSectionPair {
        CustomSectionPair {
            id: SectionId::new(),
            name: current.name.clone(),
            current,
            future,
        }
    }

    // ════════════════════════════════════════════════════════════════
    // Baseline worked example
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn baseline_line_items() {
        let metrics = RoiCalculator::analyze(&FinancialAnalysisInput::default());

        assert!(close(metrics.monthly_cost_saving, 1_620.0));
        assert!(close(metrics.quality_defect_saving, 50_000.0));
        assert!(close(metrics.special_deduction, -5_000.0));
        assert!(close(metrics.efficiency_saving, 41_666.67));
        assert!(close(metrics.cost_saving_yearly, 19_440.0));
        assert!(close(metrics.quality_saving_yearly, 540_000.0));
        assert!(close(metrics.efficiency_saving_yearly, 500_000.04));
    }

    #[test]
    fn baseline_consolidated_metrics() {
        let metrics = RoiCalculator::analyze(&FinancialAnalysisInput::default());

        assert!(close(metrics.total_annual_benefit, 1_059_440.04));
        assert!(close(metrics.total_investment, 2_991_000.0));
        assert!((metrics.roi_percent - (-64.578)).abs() < 0.01);
        assert!((metrics.payback_years - 2.8232).abs() < 0.001);
        assert!(close(metrics.payback_months, metrics.payback_years * 12.0));
        assert!(!metrics.has_formula_errors());
    }

    // ════════════════════════════════════════════════════════════════
    // Zero guards
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn zero_investment_yields_zero_roi_and_payback() {
        let zeroed = FinancialState::current_baseline()
            .with_automation_metrics(AutomationMetrics::default());
        let input = FinancialAnalysisInput::default().with_current(zeroed);
        let metrics = RoiCalculator::analyze(&input);

        assert_eq!(metrics.total_investment, 0.0);
        assert_eq!(metrics.roi_percent, 0.0);
        assert_eq!(metrics.payback_years, 0.0);
        assert_eq!(metrics.payback_months, 0.0);
    }

    #[test]
    fn non_positive_benefit_yields_zero_payback() {
        let current = FinancialState::default().with_automation_metrics(AutomationMetrics {
            opex_automation: 0.0,
            capex_automation: 1_000.0,
        });
        let input = FinancialAnalysisInput {
            current,
            future: FinancialState::default(),
            custom_sections: vec![],
        };
        let metrics = RoiCalculator::analyze(&input);

        assert_eq!(metrics.total_annual_benefit, 0.0);
        assert_eq!(metrics.payback_years, 0.0);
        assert_eq!(metrics.roi_percent, -100.0);
    }

    #[test]
    fn efficiency_uses_current_contribution_and_future_cost() {
        let current = FinancialState::default().with_efficiency(EfficiencyData {
            units_processed_before: 1_000.0,
            contribution_per_unit: 2.0,
            ..Default::default()
        });
        let future = FinancialState::default().with_efficiency(EfficiencyData {
            units_processed_after: 1_500.0,
            contribution_per_unit: 99.0,
            additional_cost: 100.0,
            ..Default::default()
        });
        assert_eq!(RoiCalculator::efficiency_saving(&current, &future), 900.0);
    }

    #[test]
    fn quality_uses_current_per_unit_cost() {
        let current = FinancialState::default().with_quality_defect(QualityDefectData {
            units_processed: 1_000.0,
            defect_percentage: 10.0,
            per_unit_cost: 4.0,
            special_deduction: 0.0,
        });
        let future = FinancialState::default().with_quality_defect(QualityDefectData {
            units_processed: 1_000.0,
            defect_percentage: 5.0,
            per_unit_cost: 1_000.0,
            special_deduction: 0.0,
        });
        assert_eq!(RoiCalculator::quality_defect_saving(&current, &future), 200.0);
    }

    // ════════════════════════════════════════════════════════════════
    // Custom sections
    // ════════════════════════════════════════════════════════════════

    #[test]
    fn custom_section_adds_twelve_times_monthly_difference() {
        let base = RoiCalculator::analyze(&FinancialAnalysisInput::default());
        let input = FinancialAnalysisInput::default().with_custom_section(pair(
            section("Energy", &[("kwh", 10_000.0), ("price", 0.25)], "{kwh} * {price}"),
            section("Energy", &[("kwh", 6_000.0), ("price", 0.25)], "{kwh} * {price}"),
        ));
        let metrics = RoiCalculator::analyze(&input);

        assert_eq!(metrics.custom_sections.len(), 1);
        assert_eq!(metrics.custom_sections[0].monthly_saving, 1_000.0);
        assert_eq!(metrics.custom_sections[0].yearly_saving, 12_000.0);
        assert!(close(
            metrics.total_annual_benefit - base.total_annual_benefit,
            12_000.0
        ));
    }

    #[test]
    fn failing_formula_is_flagged_and_counted_as_zero() {
        let input = FinancialAnalysisInput::default().with_custom_section(pair(
            section("Scrap", &[("tons", 3.0)], "{tons} * {price}"),
            section("Scrap", &[("tons", 1.0)], "{tons} * 100"),
        ));
        let metrics = RoiCalculator::analyze(&input);

        assert_eq!(metrics.custom_sections[0].current_value, 0.0);
        assert_eq!(metrics.custom_sections[0].future_value, 100.0);
        assert_eq!(metrics.custom_sections[0].monthly_saving, -100.0);
        assert_eq!(metrics.formula_errors.len(), 1);

        let issue = &metrics.formula_errors[0];
        assert_eq!(issue.side, StateSide::Current);
        assert_eq!(issue.code, "UNKNOWN_FIELD");
        assert_eq!(issue.section_name, "Scrap");
        assert!(issue.message.contains("price"));
    }

    #[test]
    fn metrics_serialize_with_roi_key() {
        let json = serde_json::to_value(RoiCalculator::analyze(&FinancialAnalysisInput::default()))
            .unwrap();
        assert!(json.get("roi").is_some());
        assert!(json.get("formulaErrors").unwrap().as_array().unwrap().is_empty());
    }

    // ════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn roi_and_payback_are_finite(benefit in -1e12f64..1e12, investment in 0.0f64..1e12) {
            prop_assert!(RoiCalculator::roi_percent(benefit, investment).is_finite());
            prop_assert!(RoiCalculator::payback_years(benefit, investment).is_finite());
        }

        #[test]
        fn custom_contribution_is_twelve_times_difference(
            current in -1e6f64..1e6,
            future in -1e6f64..1e6,
        ) {
            let base = RoiCalculator::analyze(&FinancialAnalysisInput::default());
            let input = FinancialAnalysisInput::default().with_custom_section(pair(
                section("X", &[("v", current)], "{v}"),
                section("X", &[("v", future)], "{v}"),
            ));
            let metrics = RoiCalculator::analyze(&input);
            let delta = metrics.total_annual_benefit - base.total_annual_benefit;
            prop_assert!((delta - (current - future) * 12.0).abs() < 1e-3);
        }

        #[test]
        fn analysis_is_idempotent(opex in 0.0f64..1e7, capex in 0.0f64..1e7) {
            let current = FinancialState::current_baseline()
                .with_automation_metrics(AutomationMetrics { opex_automation: opex, capex_automation: capex });
            let input = FinancialAnalysisInput::default().with_current(current);
            prop_assert_eq!(RoiCalculator::analyze(&input), RoiCalculator::analyze(&input));
        }
    }
}
