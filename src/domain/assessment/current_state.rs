//! Current State Analysis questionnaire.
//!
//! Mirrors the eight-step wizard. Every section deserializes with defaults so a
//! partially completed form is always a complete record: Likert answers start
//! at 1, continuous metrics at 0, free text empty.

use serde::{Deserialize, Serialize};

use super::category::{LikertCategory, ObservationCategory, ScoredValue};
use crate::domain::foundation::LikertScore;

/// Company size bucket. Unset until the user picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl CompanySize {
    /// Returns the display label, empty when unset.
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Small => "Small",
            CompanySize::Medium => "Medium",
            CompanySize::Large => "Large",
            CompanySize::Unspecified => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub company_name: String,
    pub location: String,
    pub primary_products: String,
    pub company_size: CompanySize,
    pub production_type: String,
    pub process_name: String,
    pub sub_process_name: String,
    pub process_description: String,
    pub number_of_shifts: u32,
    pub number_of_employees: u32,
    pub supervisor_ratio: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            location: String::new(),
            primary_products: String::new(),
            company_size: CompanySize::Unspecified,
            production_type: String::new(),
            process_name: String::new(),
            sub_process_name: String::new(),
            process_description: String::new(),
            number_of_shifts: 1,
            number_of_employees: 1,
            supervisor_ratio: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMaterialProcess {
    pub units_in_batch: u32,
    pub batch_size: String,
    pub unit_specifics: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionStage {
    pub equipment_name: String,
    pub automation_level: LikertScore,
    pub data_collected: LikertScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionProcess {
    pub stage1: ProductionStage,
    pub stage2: ProductionStage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnologySystems {
    pub production_data_tracking: LikertScore,
    pub machines_networked: LikertScore,
    pub quality_inspections: LikertScore,
    pub maintenance_type: LikertScore,
    pub inventory_management: LikertScore,
    pub existing_automation: LikertScore,
    pub digital_records: LikertScore,
    pub overall_digital_maturity: LikertScore,
}

impl LikertCategory for TechnologySystems {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Production Data Tracking", self.production_data_tracking),
            ("Equipment Connectivity", self.machines_networked),
            ("Quality Control Systems", self.quality_inspections),
            ("Maintenance Management", self.maintenance_type),
            ("Inventory Management", self.inventory_management),
            ("Current Automation Level", self.existing_automation),
            ("Digital Record Keeping", self.digital_records),
            ("Overall Digital Maturity", self.overall_digital_maturity),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkforceSkills {
    pub operator_digital_use: LikertScore,
    pub tech_training_availability: LikertScore,
    pub openness_to_new_tech: LikertScore,
}

impl LikertCategory for WorkforceSkills {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Operator Digital Tool Use", self.operator_digital_use),
            ("Tech Training Availability", self.tech_training_availability),
            ("Openness to New Technology", self.openness_to_new_tech),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PainPoints {
    pub defect_rates: ScoredValue,
    pub inconsistent_quality: ScoredValue,
    pub material_waste: ScoredValue,
    pub scheduling_delays: ScoredValue,
    pub inventory_issues: ScoredValue,
    pub labor_shortages: ScoredValue,
    pub safety_incidents: ScoredValue,
    pub energy_costs: ScoredValue,
    pub lack_visibility: ScoredValue,
    pub manual_data_entry: ScoredValue,
    pub interdept_communication: ScoredValue,
    pub vendor_communication: ScoredValue,
    pub cybersecurity_risks: ScoredValue,
    pub customer_complaints: ScoredValue,
}

impl ObservationCategory for PainPoints {
    fn observations(&self) -> Vec<(&'static str, &ScoredValue)> {
        vec![
            ("Defect Rates", &self.defect_rates),
            ("Inconsistent Quality", &self.inconsistent_quality),
            ("Material Waste", &self.material_waste),
            ("Scheduling Delays", &self.scheduling_delays),
            ("Inventory Issues", &self.inventory_issues),
            ("Labor Shortages", &self.labor_shortages),
            ("Safety Incidents", &self.safety_incidents),
            ("Energy Costs", &self.energy_costs),
            ("Lack of Visibility", &self.lack_visibility),
            ("Manual Data Entry", &self.manual_data_entry),
            ("Interdept Communication", &self.interdept_communication),
            ("Vendor Communication", &self.vendor_communication),
            ("Cybersecurity Risks", &self.cybersecurity_risks),
            ("Customer Complaints", &self.customer_complaints),
        ]
    }
}

/// Measured process performance. Only `current_system`, `qualitative_impact`
/// and the three tiered metrics contribute to the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductivityMetrics {
    pub outputs_generated: f64,
    pub avg_time_per_step: f64,
    pub avg_time_per_process: f64,
    pub labor_cost_per_step: f64,
    pub other_direct_costs: f64,
    pub total_cost_per_step: f64,
    pub total_cost_per_process: f64,
    pub process_frequency: f64,
    pub total_monthly_cost: f64,
    pub error_rate: f64,
    pub key_bottlenecks: String,
    pub current_system: LikertScore,
    pub qualitative_impact: LikertScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomationPotential {
    pub repetitive_tasks: LikertScore,
    pub data_intensive_processes: LikertScore,
    pub rule_based_decisions: LikertScore,
    pub personalized_interactions: LikertScore,
    pub quality_control: LikertScore,
}

impl LikertCategory for AutomationPotential {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Repetitive Tasks", self.repetitive_tasks),
            ("Data-Intensive Processes", self.data_intensive_processes),
            ("Rule-Based Decisions", self.rule_based_decisions),
            ("Personalized Interactions", self.personalized_interactions),
            ("Quality Control Potential", self.quality_control),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataReadiness {
    pub data_availability: LikertScore,
    pub data_quality: LikertScore,
    pub data_infrastructure: LikertScore,
    pub data_governance: LikertScore,
}

impl LikertCategory for DataReadiness {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Data Availability", self.data_availability),
            ("Data Quality", self.data_quality),
            ("Data Infrastructure", self.data_infrastructure),
            ("Data Governance", self.data_governance),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategicAlignment {
    pub ai_in_business_strategy: LikertScore,
    pub leadership_buy_in: LikertScore,
    pub ai_understanding: LikertScore,
    pub willingness_to_change: LikertScore,
}

impl LikertCategory for StrategicAlignment {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("AI in Business Strategy", self.ai_in_business_strategy),
            ("Leadership Buy-In", self.leadership_buy_in),
            ("AI Understanding", self.ai_understanding),
            ("Willingness to Change", self.willingness_to_change),
        ]
    }
}

/// The complete current-state questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentStateAnalysis {
    pub company_info: CompanyInfo,
    pub raw_material_process: RawMaterialProcess,
    pub production_process: ProductionProcess,
    pub technology_systems: TechnologySystems,
    pub workforce_skills: WorkforceSkills,
    pub pain_points: PainPoints,
    pub productivity_metrics: ProductivityMetrics,
    pub automation_potential: AutomationPotential,
    pub data_readiness: DataReadiness,
    pub strategic_alignment: StrategicAlignment,
}

impl CurrentStateAnalysis {
    pub fn with_company_info(self, company_info: CompanyInfo) -> Self {
        Self { company_info, ..self }
    }

    pub fn with_technology_systems(self, technology_systems: TechnologySystems) -> Self {
        Self {
            technology_systems,
            ..self
        }
    }

    pub fn with_workforce_skills(self, workforce_skills: WorkforceSkills) -> Self {
        Self {
            workforce_skills,
            ..self
        }
    }

    pub fn with_pain_points(self, pain_points: PainPoints) -> Self {
        Self { pain_points, ..self }
    }

    pub fn with_productivity_metrics(self, productivity_metrics: ProductivityMetrics) -> Self {
        Self {
            productivity_metrics,
            ..self
        }
    }

    pub fn with_automation_potential(self, automation_potential: AutomationPotential) -> Self {
        Self {
            automation_potential,
            ..self
        }
    }

    pub fn with_data_readiness(self, data_readiness: DataReadiness) -> Self {
        Self {
            data_readiness,
            ..self
        }
    }

    pub fn with_strategic_alignment(self, strategic_alignment: StrategicAlignment) -> Self {
        Self {
            strategic_alignment,
            ..self
        }
    }
}
