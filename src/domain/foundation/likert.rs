//! Likert score value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A five-point questionnaire score. Untouched answers sit at the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LikertScore(u8);

impl LikertScore {
    /// Lowest point on the scale.
    pub const MIN: Self = Self(1);

    /// Highest point on the scale.
    pub const MAX: Self = Self(5);

    /// Creates a LikertScore, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Creates a LikertScore, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the general five-point label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Very Low",
            2 => "Low",
            3 => "Medium",
            4 => "High",
            _ => "Very High",
        }
    }
}

impl Default for LikertScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for LikertScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<LikertScore> for u8 {
    fn from(score: LikertScore) -> Self {
        score.0
    }
}

impl From<LikertScore> for i64 {
    fn from(score: LikertScore) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for LikertScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
