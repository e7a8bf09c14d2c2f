//! Assessment inputs - the current- and future-state questionnaires.
//!
//! These are plain records with serde defaults for every field. They carry no
//! identity; scoring derives a fresh breakdown from them each time.

mod category;
mod current_state;
mod future_state;

pub use category::{LikertCategory, ObservationCategory, ScoredValue};
pub use current_state::{
    AutomationPotential, CompanyInfo, CompanySize, CurrentStateAnalysis, DataReadiness,
    PainPoints, ProductionProcess, ProductionStage, ProductivityMetrics, RawMaterialProcess,
    StrategicAlignment, TechnologySystems, WorkforceSkills,
};
pub use future_state::{
    BusinessImpact, CompanyVision, FutureProductivity, FutureStateAnalysis, FutureWorkforce,
    ImplementationStrategy, InvestmentPlanning, ProcessImprovement, RiskManagement,
    TechnologyRoadmap,
};
