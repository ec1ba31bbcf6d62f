//! Configuration loading and environment variable handling

use crate::domains::LoadrailConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "LOADRAIL".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<LoadrailConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: LoadrailConfig = serde_yaml::from_str(&content)?;

        // Apply environment variable overrides
        self.apply_env_overrides(&mut config)?;

        // Validate all domains
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<LoadrailConfig> {
        let mut config = LoadrailConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<LoadrailConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut LoadrailConfig) -> ConfigResult<()> {
        self.apply_resolver_overrides(&mut config.resolver)?;
        self.apply_documents_overrides(&mut config.documents)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply resolver config overrides
    fn apply_resolver_overrides(
        &self,
        config: &mut crate::domains::resolver::ResolverConfig,
    ) -> ConfigResult<()> {
        if let Ok(scheme) = self.get_env_var("RESOLVER_SCHEME") {
            config.scheme = scheme;
        }

        if let Ok(port) = self.get_env_var("RESOLVER_PORT") {
            config.port = Some(port.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid RESOLVER_PORT: {}", e))
            })?);
        }

        Ok(())
    }

    /// Apply documents config overrides
    fn apply_documents_overrides(
        &self,
        config: &mut crate::domains::documents::DocumentsConfig,
    ) -> ConfigResult<()> {
        if let Ok(path) = self.get_env_var("MODELING_PATH") {
            config.modeling_path = Some(path.into());
        }

        if let Ok(path) = self.get_env_var("MAPPING_PATH") {
            config.mapping_path = Some(path.into());
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
