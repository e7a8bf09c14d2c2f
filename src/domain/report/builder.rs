//! Report builders - enumerate every input field and derived metric.
//!
//! Builders do no arithmetic of their own; figures come from the calculators.
//! Output order is fixed, so a report built twice from the same inputs and
//! timestamp is identical.

use crate::domain::assessment::{
    CurrentStateAnalysis, FutureStateAnalysis, LikertCategory, ObservationCategory,
};
use crate::domain::financial::{
    FinancialAnalysisInput, FinancialMetrics, FinancialState, ProcessRoiInput, ProcessRoiMetrics,
    QuickRoiInput, QuickRoiMetrics,
};
use crate::domain::foundation::{LikertScore, Timestamp};
use crate::domain::scoring::ScoreBreakdown;

use super::report::{Report, ReportKind, ReportSection, PLACEHOLDER};

/// `$1234.50`, `-$5000.00`.
pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// `65.00%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Whole numbers without decimals, everything else with two.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn likert(score: LikertScore) -> String {
    format!("{} ({})", score.value(), score.label())
}

/// Builds [`Report`]s, substituting a placeholder for empty text.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    placeholder: String,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(PLACEHOLDER)
    }
}

impl ReportBuilder {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    fn text(&self, value: &str) -> String {
        if value.trim().is_empty() {
            self.placeholder.clone()
        } else {
            value.to_string()
        }
    }

    fn likert_section(&self, heading: &str, category: &impl LikertCategory) -> ReportSection {
        ReportSection::new(heading)
            .entries(
                category
                    .answers()
                    .into_iter()
                    .map(|(label, score)| (label, likert(score))),
            )
            .entry("Subtotal", category.subtotal().to_string())
    }

    fn observation_section(
        &self,
        heading: &str,
        category: &impl ObservationCategory,
    ) -> ReportSection {
        ReportSection::new(heading)
            .entries(category.observations().into_iter().map(|(label, obs)| {
                (
                    label,
                    format!("{} (Score: {})", self.text(&obs.absolute_value), obs.score),
                )
            }))
            .entry("Subtotal", category.subtotal().to_string())
    }

    fn score_summary(&self, breakdown: &ScoreBreakdown) -> ReportSection {
        ReportSection::new("SCORE SUMMARY")
            .entries(breakdown.categories.iter().map(|c| {
                (
                    c.label.clone(),
                    format!("{}/{} ({:.0}%, {})", c.score, c.max, c.percent, c.band),
                )
            }))
            .entry(
                "Total Score",
                format!("{}/{}", breakdown.total, breakdown.max_total),
            )
            .entry("Outcome", breakdown.outcome.clone())
    }

    // ════════════════════════════════════════════════════════════════
    // Assessments
    // ════════════════════════════════════════════════════════════════

    pub fn current_assessment(
        &self,
        analysis: &CurrentStateAnalysis,
        breakdown: &ScoreBreakdown,
        generated_at: Timestamp,
    ) -> Report {
        let info = &analysis.company_info;
        let raw = &analysis.raw_material_process;
        let production = &analysis.production_process;
        let metrics = &analysis.productivity_metrics;

        Report::new(ReportKind::CurrentAssessment, generated_at)
            .section(
                ReportSection::new("COMPANY INFORMATION")
                    .entry("Company Name", self.text(&info.company_name))
                    .entry("Location", self.text(&info.location))
                    .entry("Primary Products", self.text(&info.primary_products))
                    .entry("Company Size", self.text(info.company_size.label()))
                    .entry("Production Type", self.text(&info.production_type))
                    .entry("Process Name", self.text(&info.process_name))
                    .entry("Sub-process Name", self.text(&info.sub_process_name))
                    .entry("Process Description", self.text(&info.process_description))
                    .entry("Number of Shifts", info.number_of_shifts.to_string())
                    .entry("Number of Employees", info.number_of_employees.to_string())
                    .entry("Supervisor Ratio", self.text(&info.supervisor_ratio)),
            )
            .section(
                ReportSection::new("RAW MATERIAL PROCESS")
                    .entry("Units in Batch", raw.units_in_batch.to_string())
                    .entry("Batch Size", self.text(&raw.batch_size))
                    .entry("Unit Specifics", self.text(&raw.unit_specifics)),
            )
            .section(
                ReportSection::new("PRODUCTION PROCESS")
                    .entry("Stage 1 Equipment", self.text(&production.stage1.equipment_name))
                    .entry(
                        "Stage 1 Automation Level",
                        likert(production.stage1.automation_level),
                    )
                    .entry("Stage 1 Data Collected", likert(production.stage1.data_collected))
                    .entry("Stage 2 Equipment", self.text(&production.stage2.equipment_name))
                    .entry(
                        "Stage 2 Automation Level",
                        likert(production.stage2.automation_level),
                    )
                    .entry("Stage 2 Data Collected", likert(production.stage2.data_collected)),
            )
            .section(self.likert_section("TECHNOLOGY SYSTEMS", &analysis.technology_systems))
            .section(self.likert_section("WORKFORCE SKILLS", &analysis.workforce_skills))
            .section(self.observation_section("PAIN POINTS", &analysis.pain_points))
            .section(
                ReportSection::new("PRODUCTIVITY METRICS")
                    .entry("Outputs Generated", number(metrics.outputs_generated))
                    .entry("Avg Time per Step (min)", number(metrics.avg_time_per_step))
                    .entry("Avg Time per Process (min)", number(metrics.avg_time_per_process))
                    .entry("Labor Cost per Step", money(metrics.labor_cost_per_step))
                    .entry("Other Direct Costs", money(metrics.other_direct_costs))
                    .entry("Total Cost per Step", money(metrics.total_cost_per_step))
                    .entry("Total Cost per Process", money(metrics.total_cost_per_process))
                    .entry("Process Frequency (per month)", number(metrics.process_frequency))
                    .entry("Total Monthly Cost", money(metrics.total_monthly_cost))
                    .entry("Error Rate", percent(metrics.error_rate))
                    .entry("Key Bottlenecks", self.text(&metrics.key_bottlenecks))
                    .entry("Current System", likert(metrics.current_system))
                    .entry("Qualitative Impact", likert(metrics.qualitative_impact))
                    .entry(
                        "Subtotal",
                        breakdown.subtotal("productivityMetrics").to_string(),
                    ),
            )
            .section(self.likert_section("AUTOMATION POTENTIAL", &analysis.automation_potential))
            .section(self.likert_section("DATA READINESS", &analysis.data_readiness))
            .section(self.likert_section("STRATEGIC ALIGNMENT", &analysis.strategic_alignment))
            .section(self.score_summary(breakdown))
    }

    pub fn future_assessment(
        &self,
        analysis: &FutureStateAnalysis,
        breakdown: &ScoreBreakdown,
        generated_at: Timestamp,
    ) -> Report {
        let vision = &analysis.company_vision;
        let improvement = &analysis.process_improvement;
        let productivity = &analysis.future_productivity;

        Report::new(ReportKind::FutureAssessment, generated_at)
            .section(
                ReportSection::new("COMPANY VISION")
                    .entry("Vision Statement", self.text(&vision.vision_statement))
                    .entry("Strategic Goals", self.text(&vision.strategic_goals))
                    .entry("Timeframe", self.text(&vision.timeframe))
                    .entry("Target Markets", self.text(&vision.target_markets))
                    .entry("Competitive Advantage", self.text(&vision.competitive_advantage))
                    .entry(
                        "Digital Transformation Goals",
                        self.text(&vision.digital_transformation_goals),
                    ),
            )
            .section(
                ReportSection::new("PROCESS IMPROVEMENT")
                    .entry(
                        "Target Automation Level",
                        likert(improvement.target_automation_level),
                    )
                    .entry(
                        "Expected Efficiency Gains",
                        likert(improvement.expected_efficiency_gains),
                    )
                    .entry("Quality Targets", self.text(&improvement.quality_targets))
                    .entry("Throughput Goals", self.text(&improvement.throughput_goals))
                    .entry(
                        "Cost Reduction Targets",
                        self.text(&improvement.cost_reduction_targets),
                    )
                    .entry(
                        "Implementation Timeline",
                        self.text(&improvement.timeline_for_implementation),
                    ),
            )
            .section(self.likert_section("TECHNOLOGY ROADMAP", &analysis.technology_roadmap))
            .section(self.likert_section("FUTURE WORKFORCE", &analysis.future_workforce))
            .section(self.observation_section("BUSINESS IMPACT", &analysis.business_impact))
            .section(
                ReportSection::new("FUTURE PRODUCTIVITY")
                    .entry(
                        "Target Output Increase",
                        percent(productivity.target_output_increase),
                    )
                    .entry(
                        "Target Time Reduction",
                        percent(productivity.target_time_reduction),
                    )
                    .entry("Automation ROI", percent(productivity.automation_roi))
                    .entry("Cost per Unit Target", money(productivity.cost_per_unit_target))
                    .entry("Error Rate Reduction", percent(productivity.error_rate_reduction))
                    .entry(
                        "Expected Monthly Savings",
                        money(productivity.expected_monthly_savings),
                    )
                    .entry(
                        "Implementation Timeline",
                        self.text(&productivity.implementation_timeline),
                    )
                    .entry("Success Metrics", self.text(&productivity.success_metrics))
                    .entry(
                        "Risk Mitigation Plans",
                        self.text(&productivity.risk_mitigation_plans),
                    )
                    .entry(
                        "Future System Capabilities",
                        likert(productivity.future_system_capabilities),
                    )
                    .entry("Scalability Planning", likert(productivity.scalability_planning))
                    .entry(
                        "Subtotal",
                        breakdown.subtotal("futureProductivity").to_string(),
                    ),
            )
            .section(self.likert_section(
                "IMPLEMENTATION STRATEGY",
                &analysis.implementation_strategy,
            ))
            .section(self.likert_section("INVESTMENT PLANNING", &analysis.investment_planning))
            .section(self.likert_section("RISK MANAGEMENT", &analysis.risk_management))
            .section(self.score_summary(breakdown))
    }

    // ════════════════════════════════════════════════════════════════
    // Financials
    // ════════════════════════════════════════════════════════════════

    fn financial_side(&self, side: &str, state: &FinancialState) -> Vec<ReportSection> {
        let cost = &state.cost_reduction;
        let quality = &state.quality_defect;
        let efficiency = &state.efficiency;

        let instances = cost.process_instances.iter().enumerate().map(|(i, p)| {
            (
                format!("Instance {}", i + 1),
                format!(
                    "Labour: {}, Other: {}, Factory OH: {}, Sales OH: {}, Admin OH: {}",
                    money(p.labour),
                    money(p.other_direct_cost),
                    money(p.factory_overheads),
                    money(p.sales_overheads),
                    money(p.admin_overheads),
                ),
            )
        });

        vec![
            ReportSection::new(format!("{} - COST REDUCTION", side))
                .entries(instances)
                .entry("Other Fixed Cost", money(cost.other_fixed_cost_per_month))
                .entry("Total Monthly Cost", money(cost.total_monthly_cost())),
            ReportSection::new(format!("{} - QUALITY DEFECTS", side))
                .entry("Units Processed", number(quality.units_processed))
                .entry("Defect %", percent(quality.defect_percentage))
                .entry("Per Unit Cost", money(quality.per_unit_cost))
                .entry("Special Deduction", money(quality.special_deduction)),
            ReportSection::new(format!("{} - EFFICIENCY", side))
                .entry("Units Processed Before", number(efficiency.units_processed_before))
                .entry("Units Processed After", number(efficiency.units_processed_after))
                .entry("Contribution Per Unit", money(efficiency.contribution_per_unit))
                .entry("Additional Cost", money(efficiency.additional_cost)),
        ]
    }

    pub fn financial_analysis(
        &self,
        input: &FinancialAnalysisInput,
        metrics: &FinancialMetrics,
        generated_at: Timestamp,
    ) -> Report {
        let mut report = Report::new(ReportKind::FinancialAnalysis, generated_at);
        for section in self
            .financial_side("CURRENT STATE", &input.current)
            .into_iter()
            .chain(self.financial_side("FUTURE STATE", &input.future))
        {
            report = report.section(section);
        }

        if !metrics.custom_sections.is_empty() {
            report = report.section(ReportSection::new("CUSTOM SECTIONS").entries(
                metrics.custom_sections.iter().map(|c| {
                    (
                        self.text(&c.name),
                        format!(
                            "Current: {}, Future: {}, Monthly Saving: {}, Yearly Saving: {}",
                            money(c.current_value),
                            money(c.future_value),
                            money(c.monthly_saving),
                            money(c.yearly_saving),
                        ),
                    )
                }),
            ));
        }

        report = report.section(
            ReportSection::new("CONSOLIDATED METRICS")
                .entry("Cost Reduction Monthly Saving", money(metrics.monthly_cost_saving))
                .entry("Cost Reduction Yearly Saving", money(metrics.cost_saving_yearly))
                .entry("Quality Defect Monthly Saving", money(metrics.quality_defect_saving))
                .entry("Quality Defect Yearly Saving", money(metrics.quality_saving_yearly))
                .entry("Efficiency Monthly Saving", money(metrics.efficiency_saving))
                .entry("Efficiency Yearly Saving", money(metrics.efficiency_saving_yearly))
                .entry("Custom Sections Yearly Saving", money(metrics.custom_saving_yearly))
                .entry("Total Annual Benefit", money(metrics.total_annual_benefit))
                .entry("OPEX of Automation", money(metrics.opex_automation))
                .entry("CAPEX of Automation", money(metrics.capex_automation))
                .entry("Total Investment", money(metrics.total_investment))
                .entry("ROI", percent(metrics.roi_percent))
                .entry(
                    "Payback Period",
                    format!(
                        "{:.2} years ({:.1} months)",
                        metrics.payback_years, metrics.payback_months
                    ),
                ),
        );

        if metrics.has_formula_errors() {
            report = report.section(ReportSection::new("FORMULA ERRORS").entries(
                metrics.formula_errors.iter().map(|issue| {
                    (
                        format!("{} ({})", self.text(&issue.section_name), issue.side),
                        format!("{} [{}]", issue.message, issue.code),
                    )
                }),
            ));
        }

        report
    }

    pub fn quick_roi(
        &self,
        input: &QuickRoiInput,
        metrics: &QuickRoiMetrics,
        generated_at: Timestamp,
    ) -> Report {
        Report::new(ReportKind::QuickRoi, generated_at)
            .section(
                ReportSection::new("INPUTS")
                    .entry("Current Monthly Cost", money(input.cost_reduction.current))
                    .entry("Future Monthly Cost", money(input.cost_reduction.future))
                    .entry("Current Quality Defect Cost", money(input.quality_defects.current))
                    .entry("Future Quality Defect Cost", money(input.quality_defects.future))
                    .entry("Current Efficiency", number(input.efficiency.current))
                    .entry("Future Efficiency", number(input.efficiency.future))
                    .entry("Initial Investment", money(input.initial_investment)),
            )
            .section(
                ReportSection::new("RESULTS")
                    .entry("Cost Reduction Savings", money(metrics.cost_reduction_savings))
                    .entry(
                        "Quality Improvement Savings",
                        money(metrics.quality_improvement_savings),
                    )
                    .entry("Efficiency Gain", percent(metrics.efficiency_gain_percent))
                    .entry(
                        "Efficiency Improvement Earnings",
                        money(metrics.efficiency_improvement_earnings),
                    )
                    .entry("Total Monthly Gain", money(metrics.total_monthly_gain))
                    .entry("Total Annual Gain", money(metrics.total_annual_gain))
                    .entry(
                        "Payback Period",
                        format!("{:.2} months", metrics.payback_period_months),
                    )
                    .entry("ROI", percent(metrics.roi_percent)),
            )
    }

    pub fn process_roi(
        &self,
        input: &ProcessRoiInput,
        metrics: &ProcessRoiMetrics,
        generated_at: Timestamp,
    ) -> Report {
        Report::new(ReportKind::ProcessRoi, generated_at)
            .section(
                ReportSection::new("PROCESS ANALYSIS")
                    .entry(
                        "Current Effort",
                        format!("{} hours/month", number(input.total_effort_per_month)),
                    )
                    .entry(
                        "Current Cost",
                        format!("{}/month", money(input.current_process_cost)),
                    )
                    .entry(
                        "Time Before AI",
                        format!("{} minutes/instance", number(input.time_per_instance_before)),
                    )
                    .entry(
                        "Time After AI",
                        format!("{} minutes/instance", number(input.time_per_instance_after)),
                    )
                    .entry(
                        "Effort After AI",
                        format!("{} hours/month", number(input.effort_after_automation)),
                    )
                    .entry(
                        "Cost After AI",
                        format!("{}/month", money(input.cost_after_automation)),
                    ),
            )
            .section(
                ReportSection::new("FINANCIAL PROJECTIONS")
                    .entry("ROI", format!("{:.1}%", metrics.roi_percent))
                    .entry(
                        "Payback Period",
                        format!("{:.1} months", metrics.payback_period_months),
                    )
                    .entry("Annual Gain", money(metrics.total_annual_gain))
                    .entry("Monthly Savings", money(metrics.labor_cost_savings))
                    .entry(
                        "Time Saved per Instance",
                        format!("{} minutes", number(metrics.time_saved_per_instance)),
                    )
                    .entry(
                        "Time Saved",
                        format!("{} hours/month", number(metrics.time_saved_per_month)),
                    ),
            )
            .section(
                ReportSection::new("INVESTMENT")
                    .entry("Initial CAPEX", money(input.capex))
                    .entry(
                        "Revenue Impact",
                        format!("{}/month", money(input.revenue_impact)),
                    ),
            )
            .section(ReportSection::new("ASSESSMENT").entry("Category", metrics.category.label()))
    }
}
