//! Tier tables - bucketing of continuous productivity metrics into points.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Most points a single tier step (or fallback) may award.
pub const MAX_TIER_POINTS: u32 = 100;

/// How a tier table compares a value against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierDirection {
    /// First step with `value <= threshold` wins; thresholds ascend.
    AtMost,
    /// First step with `value > threshold` wins; thresholds descend.
    Above,
}

/// One step of a tier table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStep {
    pub threshold: f64,
    pub points: u32,
}

impl TierStep {
    pub const fn new(threshold: f64, points: u32) -> Self {
        Self { threshold, points }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct RawTierTable {
    direction: TierDirection,
    steps: Vec<TierStep>,
    fallback: u32,
}

/// An ordered threshold table mapping a continuous value to points.
///
/// Steps are checked in order; `fallback` applies when none match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTierTable")]
pub struct TierTable {
    direction: TierDirection,
    steps: Vec<TierStep>,
    fallback: u32,
}

impl TierTable {
    /// Creates a tier table, checking step ordering against the direction.
    ///
    /// # Errors
    /// - `InvalidFormat` if a threshold is not finite or thresholds are not
    ///   strictly ascending (`AtMost`) / strictly descending (`Above`).
    /// - `OutOfRange` if any step or the fallback awards more than
    ///   [`MAX_TIER_POINTS`].
    pub fn try_new(
        direction: TierDirection,
        steps: Vec<TierStep>,
        fallback: u32,
    ) -> Result<Self, ValidationError> {
        if steps.iter().any(|s| !s.threshold.is_finite()) {
            return Err(ValidationError::invalid_format(
                "tiers",
                "thresholds must be finite",
            ));
        }

        if let Some(points) = steps
            .iter()
            .map(|s| s.points)
            .chain(std::iter::once(fallback))
            .find(|&p| p > MAX_TIER_POINTS)
        {
            return Err(ValidationError::out_of_range(
                "tiers.points",
                0,
                MAX_TIER_POINTS as i32,
                i32::try_from(points).unwrap_or(i32::MAX),
            ));
        }

        let ordered = steps.windows(2).all(|pair| match direction {
            TierDirection::AtMost => pair[0].threshold < pair[1].threshold,
            TierDirection::Above => pair[0].threshold > pair[1].threshold,
        });
        if !ordered {
            let expected = match direction {
                TierDirection::AtMost => "strictly ascending",
                TierDirection::Above => "strictly descending",
            };
            return Err(ValidationError::invalid_format(
                "tiers",
                format!("thresholds must be {}", expected),
            ));
        }

        Ok(Self {
            direction,
            steps,
            fallback,
        })
    }

    /// Builds a table from steps already known to be ordered.
    pub(super) fn from_ordered(direction: TierDirection, steps: &[(f64, u32)], fallback: u32) -> Self {
        Self {
            direction,
            steps: steps.iter().map(|&(t, p)| TierStep::new(t, p)).collect(),
            fallback,
        }
    }

    /// `value <= t1 → p1, value <= t2 → p2, else fallback`.
    pub fn at_most(steps: &[(f64, u32)], fallback: u32) -> Result<Self, ValidationError> {
        Self::try_new(
            TierDirection::AtMost,
            steps.iter().map(|&(t, p)| TierStep::new(t, p)).collect(),
            fallback,
        )
    }

    /// `value > t1 → p1, value > t2 → p2, else fallback`.
    pub fn above(steps: &[(f64, u32)], fallback: u32) -> Result<Self, ValidationError> {
        Self::try_new(
            TierDirection::Above,
            steps.iter().map(|&(t, p)| TierStep::new(t, p)).collect(),
            fallback,
        )
    }

    /// Returns the points for a value.
    ///
    /// # Edge Cases
    /// - Value exactly on a threshold: matches for `AtMost`, not for `Above`
    /// - NaN: matches no step, returns the fallback
    pub fn points(&self, value: f64) -> u32 {
        self.steps
            .iter()
            .find(|step| match self.direction {
                TierDirection::AtMost => value <= step.threshold,
                TierDirection::Above => value > step.threshold,
            })
            .map(|step| step.points)
            .unwrap_or(self.fallback)
    }

    /// Highest points this table can award.
    pub fn max_points(&self) -> u32 {
        self.steps
            .iter()
            .map(|s| s.points)
            .chain(std::iter::once(self.fallback))
            .max()
            .unwrap_or(self.fallback)
    }

    pub fn direction(&self) -> TierDirection {
        self.direction
    }

    pub fn steps(&self) -> &[TierStep] {
        &self.steps
    }

    pub fn fallback(&self) -> u32 {
        self.fallback
    }
}

impl TryFrom<RawTierTable> for TierTable {
    type Error = ValidationError;

    fn try_from(raw: RawTierTable) -> Result<Self, Self::Error> {
        Self::try_new(raw.direction, raw.steps, raw.fallback)
    }
}
