//! Report structure - a titled, timestamped list of labelled sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Rendered in place of an empty value.
pub const PLACEHOLDER: &str = "—";

/// The reports the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    CurrentAssessment,
    FutureAssessment,
    FinancialAnalysis,
    QuickRoi,
    ProcessRoi,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::CurrentAssessment,
        ReportKind::FutureAssessment,
        ReportKind::FinancialAnalysis,
        ReportKind::QuickRoi,
        ReportKind::ProcessRoi,
    ];

    /// URL path segment.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::CurrentAssessment => "current-assessment",
            ReportKind::FutureAssessment => "future-assessment",
            ReportKind::FinancialAnalysis => "financial-analysis",
            ReportKind::QuickRoi => "quick-roi",
            ReportKind::ProcessRoi => "process-roi",
        }
    }

    /// Upper-case banner title.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::CurrentAssessment => "CURRENT STATE ANALYSIS REPORT",
            ReportKind::FutureAssessment => "FUTURE STATE ANALYSIS REPORT",
            ReportKind::FinancialAnalysis => "FINANCIAL ANALYSIS REPORT",
            ReportKind::QuickRoi => "QUICK ROI REPORT",
            ReportKind::ProcessRoi => "AI ROI ANALYSIS REPORT",
        }
    }

    /// Download filename prefix.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ReportKind::CurrentAssessment => "Current_State_Analysis",
            ReportKind::FutureAssessment => "Future_State_Analysis",
            ReportKind::FinancialAnalysis => "Financial_Analysis",
            ReportKind::QuickRoi => "Quick_ROI",
            ReportKind::ProcessRoi => "Process_ROI",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ReportKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("kind", format!("unknown report kind '{}'", s))
            })
    }
}

/// A labelled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
}

impl ReportEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A headed group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ReportEntry::new(label, value));
        self
    }

    pub fn entries<I, L, V>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(items.into_iter().map(|(l, v)| ReportEntry::new(l, v)));
        self
    }
}

/// A complete report, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub kind: ReportKind,
    pub title: String,
    pub generated_at: Timestamp,
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(kind: ReportKind, generated_at: Timestamp) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            generated_at,
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, section: ReportSection) -> Self {
        self.sections.push(section);
        self
    }

    /// `<File_Prefix>_<timestamp>`, without extension.
    pub fn base_filename(&self) -> String {
        format!("{}_{}", self.kind.file_prefix(), self.generated_at.file_stamp())
    }

    /// Looks up an entry value by section heading and label.
    pub fn value(&self, heading: &str, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.heading == heading)?
            .entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }
}
