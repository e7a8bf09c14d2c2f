//! Outcome tables - map an assessment total to its outcome label.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A label awarded when the total is strictly above `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeBand {
    pub threshold: u32,
    pub label: String,
}

impl OutcomeBand {
    pub fn new(threshold: u32, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawOutcomeTable {
    bands: Vec<OutcomeBand>,
    fallback: String,
}

/// Threshold table for outcome classification.
///
/// Bands are kept highest threshold first; the first band whose threshold the
/// total strictly exceeds wins, otherwise `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutcomeTable")]
pub struct OutcomeTable {
    bands: Vec<OutcomeBand>,
    fallback: String,
}

impl OutcomeTable {
    /// Creates an outcome table.
    ///
    /// # Errors
    /// - `InvalidFormat` if thresholds are not strictly descending
    /// - `EmptyField` if any label (or the fallback) is blank
    pub fn try_new(
        bands: Vec<OutcomeBand>,
        fallback: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() || bands.iter().any(|b| b.label.trim().is_empty()) {
            return Err(ValidationError::empty_field("outcome label"));
        }
        if !bands.windows(2).all(|pair| pair[0].threshold > pair[1].threshold) {
            return Err(ValidationError::invalid_format(
                "outcomes",
                "thresholds must be strictly descending",
            ));
        }
        Ok(Self { bands, fallback })
    }

    /// Current-state outcome labels.
    pub fn current_default() -> Self {
        Self {
            bands: vec![
                OutcomeBand::new(240, "Very high potential"),
                OutcomeBand::new(180, "High potential"),
                OutcomeBand::new(120, "Low potential"),
            ],
            fallback: "No potential".to_string(),
        }
    }

    /// Future-state outcome labels.
    pub fn future_default() -> Self {
        Self {
            bands: vec![
                OutcomeBand::new(280, "Comprehensive transformation strategy"),
                OutcomeBand::new(220, "Well-structured implementation plan"),
                OutcomeBand::new(160, "Solid strategic foundation"),
                OutcomeBand::new(100, "Developing implementation roadmap"),
            ],
            fallback: "Basic planning stage".to_string(),
        }
    }

    /// Returns the label for a total.
    ///
    /// # Edge Cases
    /// - Total equal to a threshold falls to the next band down
    /// - Empty band list: always the fallback
    pub fn classify(&self, total: u32) -> &str {
        self.bands
            .iter()
            .find(|band| total > band.threshold)
            .map(|band| band.label.as_str())
            .unwrap_or(&self.fallback)
    }

    pub fn bands(&self) -> &[OutcomeBand] {
        &self.bands
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl TryFrom<RawOutcomeTable> for OutcomeTable {
    type Error = ValidationError;

    fn try_from(raw: RawOutcomeTable) -> Result<Self, Self::Error> {
        Self::try_new(raw.bands, raw.fallback)
    }
}
