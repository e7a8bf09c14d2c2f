//! Future State Analysis questionnaire.

use serde::{Deserialize, Serialize};

use super::category::{LikertCategory, ObservationCategory, ScoredValue};
use crate::domain::foundation::LikertScore;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyVision {
    pub vision_statement: String,
    pub strategic_goals: String,
    pub timeframe: String,
    pub target_markets: String,
    pub competitive_advantage: String,
    pub digital_transformation_goals: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessImprovement {
    pub target_automation_level: LikertScore,
    pub expected_efficiency_gains: LikertScore,
    pub quality_targets: String,
    pub throughput_goals: String,
    pub cost_reduction_targets: String,
    pub timeline_for_implementation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnologyRoadmap {
    pub planned_tech_upgrades: LikertScore,
    pub ai_implementation_areas: LikertScore,
    pub data_integration_plans: LikertScore,
    pub cloud_migration_strategy: LikertScore,
    pub iot_implementation: LikertScore,
    pub cybersecurity_enhancements: LikertScore,
    pub digital_skills_training: LikertScore,
    pub system_integration_planning: LikertScore,
}

impl LikertCategory for TechnologyRoadmap {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Planned Technology Upgrades", self.planned_tech_upgrades),
            ("AI Implementation Areas", self.ai_implementation_areas),
            ("Data Integration Plans", self.data_integration_plans),
            ("Cloud Migration Strategy", self.cloud_migration_strategy),
            ("IoT Implementation", self.iot_implementation),
            ("Cybersecurity Enhancements", self.cybersecurity_enhancements),
            ("Digital Skills Training", self.digital_skills_training),
            ("System Integration Planning", self.system_integration_planning),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FutureWorkforce {
    pub skill_development_plans: LikertScore,
    pub role_evolution_strategy: LikertScore,
    pub change_management_approach: LikertScore,
    pub training_investment: LikertScore,
}

impl LikertCategory for FutureWorkforce {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Skill Development Plans", self.skill_development_plans),
            ("Role Evolution Strategy", self.role_evolution_strategy),
            ("Change Management Approach", self.change_management_approach),
            ("Training Investment", self.training_investment),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessImpact {
    pub revenue_growth_targets: ScoredValue,
    pub cost_savings_targets: ScoredValue,
    pub productivity_improvements: ScoredValue,
    pub customer_experience_goals: ScoredValue,
    pub time_to_market_improvements: ScoredValue,
    pub quality_improvements: ScoredValue,
    pub sustainability_goals: ScoredValue,
    pub innovation_metrics: ScoredValue,
    pub market_share_targets: ScoredValue,
    pub customer_satisfaction_goals: ScoredValue,
    pub employee_engagement_targets: ScoredValue,
    pub compliance_improvements: ScoredValue,
}

impl ObservationCategory for BusinessImpact {
    fn observations(&self) -> Vec<(&'static str, &ScoredValue)> {
        vec![
            ("Revenue Growth Targets", &self.revenue_growth_targets),
            ("Cost Savings Targets", &self.cost_savings_targets),
            ("Productivity Improvements", &self.productivity_improvements),
            ("Customer Experience Goals", &self.customer_experience_goals),
            ("Time to Market Improvements", &self.time_to_market_improvements),
            ("Quality Improvements", &self.quality_improvements),
            ("Sustainability Goals", &self.sustainability_goals),
            ("Innovation Metrics", &self.innovation_metrics),
            ("Market Share Targets", &self.market_share_targets),
            ("Customer Satisfaction Goals", &self.customer_satisfaction_goals),
            ("Employee Engagement Targets", &self.employee_engagement_targets),
            ("Compliance Improvements", &self.compliance_improvements),
        ]
    }
}

/// Targeted productivity. `automation_roi`, `target_output_increase` and
/// `expected_monthly_savings` are tiered; the two Likert answers add directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FutureProductivity {
    pub target_output_increase: f64,
    pub target_time_reduction: f64,
    #[serde(rename = "automationROI", alias = "automationRoi")]
    pub automation_roi: f64,
    pub cost_per_unit_target: f64,
    pub error_rate_reduction: f64,
    pub expected_monthly_savings: f64,
    pub implementation_timeline: String,
    pub success_metrics: String,
    pub risk_mitigation_plans: String,
    pub future_system_capabilities: LikertScore,
    pub scalability_planning: LikertScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImplementationStrategy {
    pub phase_one_activities: LikertScore,
    pub phase_two_activities: LikertScore,
    pub phase_three_activities: LikertScore,
    pub pilot_program_approach: LikertScore,
    pub change_management_strategy: LikertScore,
}

impl LikertCategory for ImplementationStrategy {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Phase One Activities", self.phase_one_activities),
            ("Phase Two Activities", self.phase_two_activities),
            ("Phase Three Activities", self.phase_three_activities),
            ("Pilot Program Approach", self.pilot_program_approach),
            ("Change Management Strategy", self.change_management_strategy),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentPlanning {
    pub budget_allocation: LikertScore,
    pub roi_expectations: LikertScore,
    pub funding_sources: LikertScore,
    pub cost_benefit_analysis: LikertScore,
}

impl LikertCategory for InvestmentPlanning {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Budget Allocation", self.budget_allocation),
            ("ROI Expectations", self.roi_expectations),
            ("Funding Sources", self.funding_sources),
            ("Cost-Benefit Analysis", self.cost_benefit_analysis),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskManagement {
    pub technical_risks: LikertScore,
    pub organizational_risks: LikertScore,
    pub market_risks: LikertScore,
    pub mitigation_strategies: LikertScore,
}

impl LikertCategory for RiskManagement {
    fn answers(&self) -> Vec<(&'static str, LikertScore)> {
        vec![
            ("Technical Risks", self.technical_risks),
            ("Organizational Risks", self.organizational_risks),
            ("Market Risks", self.market_risks),
            ("Mitigation Strategies", self.mitigation_strategies),
        ]
    }
}

/// The complete future-state questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FutureStateAnalysis {
    pub company_vision: CompanyVision,
    pub process_improvement: ProcessImprovement,
    pub technology_roadmap: TechnologyRoadmap,
    pub future_workforce: FutureWorkforce,
    pub business_impact: BusinessImpact,
    pub future_productivity: FutureProductivity,
    pub implementation_strategy: ImplementationStrategy,
    pub investment_planning: InvestmentPlanning,
    pub risk_management: RiskManagement,
}

impl FutureStateAnalysis {
    pub fn with_technology_roadmap(self, technology_roadmap: TechnologyRoadmap) -> Self {
        Self {
            technology_roadmap,
            ..self
        }
    }

    pub fn with_future_workforce(self, future_workforce: FutureWorkforce) -> Self {
        Self {
            future_workforce,
            ..self
        }
    }

    pub fn with_business_impact(self, business_impact: BusinessImpact) -> Self {
        Self {
            business_impact,
            ..self
        }
    }

    pub fn with_future_productivity(self, future_productivity: FutureProductivity) -> Self {
        Self {
            future_productivity,
            ..self
        }
    }

    pub fn with_implementation_strategy(
        self,
        implementation_strategy: ImplementationStrategy,
    ) -> Self {
        Self {
            implementation_strategy,
            ..self
        }
    }

    pub fn with_investment_planning(self, investment_planning: InvestmentPlanning) -> Self {
        Self {
            investment_planning,
            ..self
        }
    }

    pub fn with_risk_management(self, risk_management: RiskManagement) -> Self {
        Self {
            risk_management,
            ..self
        }
    }
}
