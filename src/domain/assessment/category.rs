//! Category shapes shared by the current- and future-state questionnaires.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LikertScore;

/// A scored observation: free-text magnitude plus a 1-5 severity/impact score.
///
/// Used for pain points and business-impact targets. `absolute_value` is
/// carried through to reports and never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoredValue {
    pub absolute_value: String,
    pub score: LikertScore,
}

impl ScoredValue {
    /// Creates a scored value.
    pub fn new(absolute_value: impl Into<String>, score: LikertScore) -> Self {
        Self {
            absolute_value: absolute_value.into(),
            score,
        }
    }
}

/// A category whose subtotal is the plain sum of its Likert answers.
pub trait LikertCategory {
    /// Labelled answers in display order.
    fn answers(&self) -> Vec<(&'static str, LikertScore)>;

    /// Sum of all answers.
    fn subtotal(&self) -> u32 {
        self.answers()
            .iter()
            .map(|(_, score)| u32::from(score.value()))
            .sum()
    }
}

/// A category whose subtotal is the sum of its observations' scores.
pub trait ObservationCategory {
    /// Labelled observations in display order.
    fn observations(&self) -> Vec<(&'static str, &ScoredValue)>;

    /// Sum of all observation scores.
    fn subtotal(&self) -> u32 {
        self.observations()
            .iter()
            .map(|(_, obs)| u32::from(obs.score.value()))
            .sum()
    }
}
