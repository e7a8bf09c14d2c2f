//! Scoring module - Category aggregation, bands and outcome classification.
//!
//! Pure functions over the assessment records. All thresholds live in
//! [`ScoringRules`] so they can be tuned from configuration.

mod breakdown;
mod calculator;
mod outcome;
mod rules;
mod tiers;

pub use breakdown::{AssessmentKind, CategoryBand, CategoryScore, ScoreBreakdown};
pub use calculator::{ScoreCalculator, CURRENT_CATEGORIES, FUTURE_CATEGORIES};
pub use outcome::{OutcomeBand, OutcomeTable};
pub use rules::ScoringRules;
pub use tiers::{TierDirection, TierStep, TierTable, MAX_TIER_POINTS};
