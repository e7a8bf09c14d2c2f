//! Financial analysis inputs - monthly cost, quality and efficiency records.

use serde::{Deserialize, Serialize};

use super::custom_section::CustomSectionPair;

/// Monthly cost lines of one process instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInstance {
    pub labour: f64,
    pub other_direct_cost: f64,
    pub factory_overheads: f64,
    pub sales_overheads: f64,
    pub admin_overheads: f64,
}

impl ProcessInstance {
    pub const fn new(
        labour: f64,
        other_direct_cost: f64,
        factory_overheads: f64,
        sales_overheads: f64,
        admin_overheads: f64,
    ) -> Self {
        Self {
            labour,
            other_direct_cost,
            factory_overheads,
            sales_overheads,
            admin_overheads,
        }
    }

    /// Sum of all five cost lines.
    pub fn total(&self) -> f64 {
        self.labour
            + self.other_direct_cost
            + self.factory_overheads
            + self.sales_overheads
            + self.admin_overheads
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostReductionData {
    pub process_instances: Vec<ProcessInstance>,
    pub other_fixed_cost_per_month: f64,
}

impl CostReductionData {
    /// Process instance costs plus the fixed monthly cost.
    pub fn total_monthly_cost(&self) -> f64 {
        self.process_instances
            .iter()
            .map(ProcessInstance::total)
            .sum::<f64>()
            + self.other_fixed_cost_per_month
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityDefectData {
    pub units_processed: f64,
    pub defect_percentage: f64,
    pub per_unit_cost: f64,
    /// Monthly adjustment; only the future side's value is used.
    pub special_deduction: f64,
}

impl QualityDefectData {
    /// `unitsProcessed * defectPercentage / 100`
    pub fn defects(&self) -> f64 {
        self.units_processed * self.defect_percentage / 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EfficiencyData {
    pub units_processed_before: f64,
    pub units_processed_after: f64,
    pub contribution_per_unit: f64,
    pub additional_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomationMetrics {
    pub opex_automation: f64,
    pub capex_automation: f64,
}

impl AutomationMetrics {
    pub fn total_investment(&self) -> f64 {
        self.opex_automation + self.capex_automation
    }
}

/// One side (current or future) of a financial analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialState {
    pub cost_reduction: CostReductionData,
    pub quality_defect: QualityDefectData,
    pub efficiency: EfficiencyData,
    pub automation_metrics: AutomationMetrics,
}

impl FinancialState {
    /// Worked example used to prefill the current side.
    pub fn current_baseline() -> Self {
        Self {
            cost_reduction: CostReductionData {
                process_instances: vec![
                    ProcessInstance::new(500.0, 500.0, 50.0, 20.0, 10.0),
                    ProcessInstance::new(500.0, 0.0, 30.0, 20.0, 10.0),
                    ProcessInstance::new(700.0, 0.0, 0.0, 0.0, 0.0),
                    ProcessInstance::new(850.0, 0.0, 0.0, 0.0, 0.0),
                ],
                other_fixed_cost_per_month: 200_000.0,
            },
            quality_defect: QualityDefectData {
                units_processed: 100_000.0,
                defect_percentage: 7.0,
                per_unit_cost: 10.0,
                special_deduction: 0.0,
            },
            efficiency: EfficiencyData {
                units_processed_before: 100_000.0,
                units_processed_after: 100_000.0,
                contribution_per_unit: 5.0,
                additional_cost: 0.0,
            },
            automation_metrics: AutomationMetrics {
                opex_automation: 1_991_000.0,
                capex_automation: 1_000_000.0,
            },
        }
    }

    /// Worked example used to prefill the future side.
    pub fn future_baseline() -> Self {
        Self {
            cost_reduction: CostReductionData {
                process_instances: vec![
                    ProcessInstance::new(500.0, 0.0, 30.0, 20.0, 10.0),
                    ProcessInstance::new(500.0, 0.0, 30.0, 20.0, 10.0),
                    ProcessInstance::new(450.0, 0.0, 0.0, 0.0, 0.0),
                    ProcessInstance::default(),
                ],
                other_fixed_cost_per_month: 200_000.0,
            },
            quality_defect: QualityDefectData {
                units_processed: 100_000.0,
                defect_percentage: 2.0,
                per_unit_cost: 10.0,
                special_deduction: -5_000.0,
            },
            efficiency: EfficiencyData {
                units_processed_before: 100_000.0,
                units_processed_after: 110_000.0,
                contribution_per_unit: 5.0,
                additional_cost: 8_333.33,
            },
            automation_metrics: AutomationMetrics {
                opex_automation: 1_991_000.0,
                capex_automation: 1_000_000.0,
            },
        }
    }

    pub fn with_cost_reduction(self, cost_reduction: CostReductionData) -> Self {
        Self {
            cost_reduction,
            ..self
        }
    }

    pub fn with_quality_defect(self, quality_defect: QualityDefectData) -> Self {
        Self {
            quality_defect,
            ..self
        }
    }

    pub fn with_efficiency(self, efficiency: EfficiencyData) -> Self {
        Self { efficiency, ..self }
    }

    pub fn with_automation_metrics(self, automation_metrics: AutomationMetrics) -> Self {
        Self {
            automation_metrics,
            ..self
        }
    }
}

/// Current/future pair plus any custom sections.
///
/// A side missing from the request falls back to its baseline worked example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysisInput {
    #[serde(default = "FinancialState::current_baseline")]
    pub current: FinancialState,
    #[serde(default = "FinancialState::future_baseline")]
    pub future: FinancialState,
    #[serde(default)]
    pub custom_sections: Vec<CustomSectionPair>,
}

impl Default for FinancialAnalysisInput {
    fn default() -> Self {
        Self {
            current: FinancialState::current_baseline(),
            future: FinancialState::future_baseline(),
            custom_sections: Vec::new(),
        }
    }
}

impl FinancialAnalysisInput {
    pub fn with_current(self, current: FinancialState) -> Self {
        Self { current, ..self }
    }

    pub fn with_future(self, future: FinancialState) -> Self {
        Self { future, ..self }
    }

    pub fn with_custom_section(mut self, section: CustomSectionPair) -> Self {
        self.custom_sections.push(section);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_monthly_costs() {
        assert_eq!(
            FinancialState::current_baseline()
                .cost_reduction
                .total_monthly_cost(),
            203_190.0
        );
        assert_eq!(
            FinancialState::future_baseline()
                .cost_reduction
                .total_monthly_cost(),
            201_570.0
        );
    }

    #[test]
    fn defects_from_percentage() {
        let quality = FinancialState::current_baseline().quality_defect;
        assert_eq!(quality.defects(), 7_000.0);
    }

    #[test]
    fn empty_request_uses_baselines() {
        let input: FinancialAnalysisInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, FinancialAnalysisInput::default());
    }

    #[test]
    fn supplied_side_fills_missing_fields_with_zero() {
        let json = r#"{"current": {"qualityDefect": {"unitsProcessed": 10}}}"#;
        let input: FinancialAnalysisInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.current.quality_defect.units_processed, 10.0);
        assert_eq!(input.current.quality_defect.defect_percentage, 0.0);
        assert!(input.current.cost_reduction.process_instances.is_empty());
        assert_eq!(input.future, FinancialState::future_baseline());
    }

    #[test]
    fn camel_case_wire_names() {
        let json = serde_json::to_value(FinancialState::future_baseline()).unwrap();
        assert_eq!(json["qualityDefect"]["specialDeduction"], -5000.0);
        assert_eq!(json["automationMetrics"]["capexAutomation"], 1_000_000.0);
        assert_eq!(
            json["costReduction"]["processInstances"][0]["factoryOverheads"],
            30.0
        );
    }
}
