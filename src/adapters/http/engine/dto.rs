//! Data Transfer Objects for the engine endpoints.
//!
//! Request bodies are the domain input records themselves (camelCase on the
//! wire), so only the envelope types live here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::ports::ExportFormat;

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub pdf_export: bool,
}

impl HealthResponse {
    pub fn ok(pdf_export: bool) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            pdf_export,
        }
    }
}

/// Query parameters for report export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    /// `text`, `csv`, `markdown`, `html` or `pdf`; text when absent.
    pub format: Option<String>,
}

impl ReportQuery {
    pub fn format_or_default(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.trim().is_empty())
    }
}

/// Accepted when a format string is absent.
pub const DEFAULT_REPORT_FORMAT: ExportFormat = ExportFormat::Text;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            // Sorted keys keep responses stable.
            let sorted: BTreeMap<_, _> = error.details.iter().collect();
            serde_json::to_value(sorted).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn health_response_serializes_camel_case() {
        let json = serde_json::to_value(HealthResponse::ok(false)).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["pdfExport"], false);
        assert!(json["version"].is_string());
    }

    #[test]
    fn error_response_from_domain_error_includes_details() {
        let error = DomainError::validation("kind", "unknown report kind");
        let response = ErrorResponse::from(&error);

        assert_eq!(response.code, "VALIDATION_FAILED");
        assert_eq!(response.details.unwrap()["field"], "kind");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let error = DomainError::new(ErrorCode::ExportFailed, "boom");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["code"], "EXPORT_FAILED");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn blank_format_counts_as_absent() {
        let query = ReportQuery {
            format: Some(" ".to_string()),
        };
        assert_eq!(query.format_or_default(), None);
    }
}
