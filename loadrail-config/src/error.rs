//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// Configuration file is not valid YAML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// An environment variable override could not be applied
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// A configuration domain rejected its settings
    #[error("Domain configuration error in {domain}: {message}")]
    DomainError { domain: String, message: String },
}
