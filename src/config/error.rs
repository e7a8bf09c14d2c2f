//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid PDF conversion timeout")]
    InvalidPdfTimeout,

    #[error("Report placeholder must not be empty")]
    EmptyPlaceholder,

    #[error("Pandoc path must not be empty when set")]
    EmptyPandocPath,

    #[error("Efficiency base must be a positive finite number")]
    InvalidEfficiencyBase,

    #[error("Verbose errors must be disabled in production")]
    VerboseErrorsInProduction,
}
