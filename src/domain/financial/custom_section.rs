//! User-defined financial sections evaluated by formula.

use serde::{Deserialize, Serialize};

use super::formula::{Formula, FormulaError};
use crate::domain::foundation::SectionId;

/// A named numeric input of a custom section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub name: String,
    pub value: f64,
}

impl CustomField {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A user-defined monthly figure: fields plus a formula over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub id: SectionId,
    pub name: String,
    pub fields: Vec<CustomField>,
    pub formula: String,
}

impl CustomSection {
    pub fn new(name: impl Into<String>, fields: Vec<CustomField>, formula: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            name: name.into(),
            fields,
            formula: formula.into(),
        }
    }

    /// Value of a field by exact name; first match wins on duplicates.
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.value)
    }

    /// Evaluates the section formula against its own fields.
    pub fn evaluate(&self) -> Result<f64, FormulaError> {
        Formula::parse(&self.formula)?.evaluate(|name| self.field(name))
    }

    /// Returns a copy with one field's value replaced or appended.
    pub fn with_field(mut self, name: &str, value: f64) -> Self {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(CustomField::new(name, value)),
        }
        self
    }
}

/// A custom section appearing on both sides of the analysis.
///
/// Its monthly saving is `current - future`; the annual contribution is twelve
/// times that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionPair {
    pub id: SectionId,
    pub name: String,
    pub current: CustomSection,
    pub future: CustomSection,
}
