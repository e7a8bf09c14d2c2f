//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Serve PDF reports through Pandoc
    #[serde(default = "default_true")]
    pub enable_pdf_export: bool,

    /// Show internal error messages; rejected in production
    #[serde(default)]
    pub verbose_errors: bool,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_pdf_export: true,
            verbose_errors: false,
            json_logs: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_pdf_export);
        assert!(!flags.verbose_errors);
        assert!(!flags.json_logs);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_pdf_export": false,
            "json_logs": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_pdf_export);
        assert!(!flags.verbose_errors);
        assert!(flags.json_logs);
    }
}
