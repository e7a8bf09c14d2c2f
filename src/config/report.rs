//! Report export configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::document::DEFAULT_PDF_TIMEOUT_SECS;
use crate::domain::report::PLACEHOLDER;

/// Report rendering and conversion settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Rendered in place of empty values
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Pandoc timeout in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Pandoc executable; searched on PATH when unset
    pub pandoc_path: Option<String>,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.placeholder.is_empty() {
            return Err(ValidationError::EmptyPlaceholder);
        }
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        if matches!(&self.pandoc_path, Some(path) if path.trim().is_empty()) {
            return Err(ValidationError::EmptyPandocPath);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            pdf_timeout_secs: default_pdf_timeout(),
            pandoc_path: None,
        }
    }
}

fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn default_pdf_timeout() -> u64 {
    DEFAULT_PDF_TIMEOUT_SECS
}
