//! URL resolver configuration

use crate::error::ConfigResult;
use crate::validation::{
    validate_enum_choice, validate_port_range, validate_required_string, validate_url, Validatable,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for building base URLs from resolved hosts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// URL scheme for resolved hosts
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Port appended to every resolved base URL, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Fixed host → base-URL overrides consulted before scheme resolution
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            port: None,
            overrides: BTreeMap::new(),
        }
    }
}

impl Validatable for ResolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.scheme, "scheme", self.domain_name())?;
        validate_enum_choice(&self.scheme, &["http", "https"], "scheme", self.domain_name())?;

        if let Some(port) = self.port {
            validate_port_range(port, "port", self.domain_name())?;
        }

        for (host, base_url) in &self.overrides {
            validate_required_string(host, "overrides key", self.domain_name())?;
            validate_url(base_url, "overrides value", self.domain_name())?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "resolver"
    }
}

fn default_scheme() -> String {
    "http".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_config_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.scheme, "http");
        assert!(config.port.is_none());
        assert!(config.overrides.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let config = ResolverConfig {
            scheme: "gopher".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = ResolverConfig {
            port: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_override_values_must_be_urls() {
        let mut config = ResolverConfig::default();
        config
            .overrides
            .insert("orders.staging.local".to_string(), "not a url".to_string());
        assert!(config.validate().is_err());

        config.overrides.insert(
            "orders.staging.local".to_string(),
            "http://10.0.0.7:8080".to_string(),
        );
        assert!(config.validate().is_ok());
    }
}
