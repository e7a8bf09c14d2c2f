//! Score breakdown - per-category subtotals, total and outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::outcome::OutcomeTable;

/// Which questionnaire a breakdown was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Current,
    Future,
}

impl AssessmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentKind::Current => "Current State Analysis",
            AssessmentKind::Future => "Future State Analysis",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative band for a category's share of its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryBand {
    Weak,
    Fair,
    Good,
    Strong,
}

impl CategoryBand {
    /// `>= 80 Strong, >= 60 Good, >= 40 Fair, else Weak`.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            CategoryBand::Strong
        } else if percent >= 60.0 {
            CategoryBand::Good
        } else if percent >= 40.0 {
            CategoryBand::Fair
        } else {
            CategoryBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryBand::Strong => "Strong",
            CategoryBand::Good => "Good",
            CategoryBand::Fair => "Fair",
            CategoryBand::Weak => "Weak",
        }
    }
}

impl fmt::Display for CategoryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One scored category measured against its dashboard maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub key: String,
    pub label: String,
    pub score: u32,
    pub max: u32,
    /// Share of `max`, capped at 100.
    pub percent: f64,
    pub band: CategoryBand,
}

impl CategoryScore {
    /// Scores a category against its maximum.
    ///
    /// # Edge Cases
    /// - `max == 0`: percent is 0
    /// - `score > max`: percent is capped at 100
    pub fn new(key: impl Into<String>, label: impl Into<String>, score: u32, max: u32) -> Self {
        let percent = if max == 0 {
            0.0
        } else {
            (f64::from(score) / f64::from(max) * 100.0).min(100.0)
        };
        Self {
            key: key.into(),
            label: label.into(),
            score,
            max,
            percent,
            band: CategoryBand::from_percent(percent),
        }
    }
}

/// Result of scoring one questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub assessment: AssessmentKind,
    pub categories: Vec<CategoryScore>,
    pub total: u32,
    pub max_total: u32,
    pub outcome: String,
}

impl ScoreBreakdown {
    /// Builds a breakdown; `total` is always the sum of the category scores.
    pub fn from_categories(
        assessment: AssessmentKind,
        categories: Vec<CategoryScore>,
        outcomes: &OutcomeTable,
    ) -> Self {
        let total = categories.iter().map(|c| c.score).sum();
        let max_total = categories.iter().map(|c| c.max).sum();
        Self {
            assessment,
            outcome: outcomes.classify(total).to_string(),
            categories,
            total,
            max_total,
        }
    }

    /// Looks up a category by its wire key.
    pub fn category(&self, key: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Subtotal for a category, 0 if absent.
    pub fn subtotal(&self, key: &str) -> u32 {
        self.category(key).map(|c| c.score).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(CategoryBand::from_percent(100.0), CategoryBand::Strong);
        assert_eq!(CategoryBand::from_percent(80.0), CategoryBand::Strong);
        assert_eq!(CategoryBand::from_percent(79.9), CategoryBand::Good);
        assert_eq!(CategoryBand::from_percent(60.0), CategoryBand::Good);
        assert_eq!(CategoryBand::from_percent(40.0), CategoryBand::Fair);
        assert_eq!(CategoryBand::from_percent(39.9), CategoryBand::Weak);
        assert_eq!(CategoryBand::from_percent(0.0), CategoryBand::Weak);
    }

    #[test]
    fn category_score_percent() {
        let score = CategoryScore::new("technologySystems", "Technology Systems", 32, 40);
        assert_eq!(score.percent, 80.0);
        assert_eq!(score.band, CategoryBand::Strong);
    }

    #[test]
    fn category_score_caps_and_guards() {
        let over = CategoryScore::new("productivityMetrics", "Productivity Metrics", 25, 17);
        assert_eq!(over.percent, 100.0);

        let zero = CategoryScore::new("x", "X", 5, 0);
        assert_eq!(zero.percent, 0.0);
        assert_eq!(zero.band, CategoryBand::Weak);
    }

    #[test]
    fn breakdown_total_is_sum_of_categories() {
        let breakdown = ScoreBreakdown::from_categories(
            AssessmentKind::Current,
            vec![
                CategoryScore::new("a", "A", 100, 150),
                CategoryScore::new("b", "B", 90, 150),
            ],
            &OutcomeTable::current_default(),
        );
        assert_eq!(breakdown.total, 190);
        assert_eq!(breakdown.max_total, 300);
        assert_eq!(breakdown.outcome, "High potential");
        assert_eq!(breakdown.subtotal("b"), 90);
        assert_eq!(breakdown.subtotal("missing"), 0);
    }

    #[test]
    fn breakdown_serializes_camel_case() {
        let breakdown = ScoreBreakdown::from_categories(
            AssessmentKind::Future,
            vec![CategoryScore::new("riskManagement", "Risk Management", 4, 20)],
            &OutcomeTable::future_default(),
        );
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["assessment"], "future");
        assert_eq!(json["maxTotal"], 20);
        assert_eq!(json["categories"][0]["band"], "Weak");
    }
}
