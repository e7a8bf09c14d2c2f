//! Financial module - Savings, ROI and payback calculations.
//!
//! Three independent models share the same zero guards:
//!
//! - [`RoiCalculator`] consolidates a current/future [`FinancialAnalysisInput`],
//!   including user-defined [`CustomSection`]s evaluated by [`Formula`]
//! - [`QuickRoiCalculator`] is the four-figure estimate
//! - [`ProcessRoiCalculator`] rates automation of a single process
//!
//! Every published figure is finite. A failing custom formula is counted as
//! zero and listed in [`FinancialMetrics::formula_errors`].

mod custom_section;
mod financial_state;
mod formula;
mod process_roi;
mod quick_roi;
mod roi_calculator;

pub use custom_section::{CustomField, CustomSection, CustomSectionPair};
pub use financial_state::{
    AutomationMetrics, CostReductionData, EfficiencyData, FinancialAnalysisInput, FinancialState,
    ProcessInstance, QualityDefectData,
};
pub use formula::{Formula, FormulaError, MAX_FORMULA_DEPTH, MAX_FORMULA_LEN};
pub use process_roi::{ProcessRoiCalculator, ProcessRoiInput, ProcessRoiMetrics, RoiCategory};
pub use quick_roi::{
    CurrentFuture, QuickRoiCalculator, QuickRoiInput, QuickRoiMetrics, DEFAULT_EFFICIENCY_BASE,
};
pub use roi_calculator::{
    finite_or_zero, CustomSectionResult, FinancialMetrics, FormulaIssue, RoiCalculator, StateSide,
    MONTHS_PER_YEAR,
};
