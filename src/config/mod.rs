//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config` and
//! `dotenvy` crates. Values come from an optional `ai4profit.{toml,yaml,json}`
//! file, overridden by environment variables with the `AI4PROFIT` prefix;
//! nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ai4profit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod report;
mod roi;
mod server;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use report::ReportConfig;
pub use roi::RoiConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::domain::scoring::ScoringRules;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_FILE_ENV: &str = "AI4PROFIT_CONFIG";

/// Configuration file looked up when [`CONFIG_FILE_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ai4profit";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Outcome and tier tables; validated while deserializing
    #[serde(default)]
    pub scoring: ScoringRules,

    #[serde(default)]
    pub roi: RoiConfig,

    /// Report placeholder and PDF conversion
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from the default file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `AI4PROFIT_CONFIG`, or `ai4profit.*` if present
    /// 3. Reads environment variables with `AI4PROFIT` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AI4PROFIT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AI4PROFIT__ROI__EFFICIENCY_BASE=50000` -> `roi.efficiency_base = 50000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    /// or a scoring table is misordered.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&file)
    }

    /// Load configuration from a specific file (optional) plus the environment.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("AI4PROFIT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.roi.validate()?;
        self.report.validate()?;
        if self.is_production() && self.features.verbose_errors {
            return Err(ValidationError::VerboseErrorsInProduction);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const MISSING_FILE: &str = "/nonexistent/ai4profit-test-config";

    fn clear_env() {
        env::remove_var("AI4PROFIT__SERVER__PORT");
        env::remove_var("AI4PROFIT__SERVER__ENVIRONMENT");
        env::remove_var("AI4PROFIT__ROI__EFFICIENCY_BASE");
        env::remove_var("AI4PROFIT__REPORT__PDF_TIMEOUT_SECS");
        env::remove_var("AI4PROFIT__FEATURES__ENABLE_PDF_EXPORT");
    }

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load_from(MISSING_FILE).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.roi.efficiency_base, 100_000.0);
        assert_eq!(config.scoring, ScoringRules::default());
        assert!(config.features.enable_pdf_export);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("AI4PROFIT__SERVER__PORT", "3000");
        env::set_var("AI4PROFIT__SERVER__ENVIRONMENT", "production");
        env::set_var("AI4PROFIT__ROI__EFFICIENCY_BASE", "50000");
        env::set_var("AI4PROFIT__FEATURES__ENABLE_PDF_EXPORT", "false");
        let result = AppConfig::load_from(MISSING_FILE);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.roi.efficiency_base, 50_000.0);
        assert!(!config.features.enable_pdf_export);
    }

    #[test]
    fn test_file_supplies_scoring_tables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let path = write_temp_config(
            "ai4profit-scoring",
            r#"
[scoring.current_outcomes]
fallback = "Nothing"
bands = [{ threshold = 100, label = "Something" }]

[report]
placeholder = "n/a"
"#,
        );
        let result = AppConfig::load_from(path.to_string_lossy().as_ref());
        std::fs::remove_file(&path).ok();

        let config = result.unwrap();
        assert_eq!(config.scoring.current_outcomes.classify(101), "Something");
        assert_eq!(config.scoring.current_outcomes.classify(100), "Nothing");
        assert_eq!(config.scoring.error_rate, ScoringRules::default().error_rate);
        assert_eq!(config.report.placeholder, "n/a");
    }

    #[test]
    fn test_misordered_file_table_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let path = write_temp_config(
            "ai4profit-misordered",
            r#"
[scoring.error_rate]
direction = "at_most"
fallback = 1
steps = [{ threshold = 10.0, points = 3 }, { threshold = 3.0, points = 5 }]
"#,
        );
        let result = AppConfig::load_from(path.to_string_lossy().as_ref());
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_verbose_errors_in_production() {
        let mut config = AppConfig::default();
        config.features.verbose_errors = true;
        assert!(config.validate().is_ok());

        config.server.environment = Environment::Production;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::VerboseErrorsInProduction)
        ));

        config.features.verbose_errors = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let config = AppConfig {
            report: ReportConfig {
                pdf_timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPdfTimeout)
        ));
    }
}
