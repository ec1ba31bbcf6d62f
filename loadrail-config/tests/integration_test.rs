//! Integration tests for loadrail-config

use loadrail_config::domains::logging::{LogFormat, LogLevel};
use loadrail_config::*;
use std::fs;
use std::path::PathBuf;
use temp_env::with_vars;
use tempfile::TempDir;

#[test]
fn test_default_config_validation() {
    let config = LoadrailConfig::default();
    assert!(config.validate_all().is_ok());
}

#[test]
fn test_config_loader_from_env() {
    let vars = vec![
        ("LOADRAIL_RESOLVER_SCHEME", Some("https")),
        ("LOADRAIL_RESOLVER_PORT", Some("8443")),
        ("LOADRAIL_LOG_LEVEL", Some("debug")),
        ("LOADRAIL_LOG_FORMAT", Some("json")),
        ("LOADRAIL_MODELING_PATH", Some("/etc/loadrail/modeling.yaml")),
    ];

    with_vars(vars, || {
        let loader = ConfigLoader::new();
        let config = loader.from_env().unwrap();

        assert_eq!(config.resolver.scheme, "https");
        assert_eq!(config.resolver.port, Some(8443));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.documents.modeling_path,
            Some(PathBuf::from("/etc/loadrail/modeling.yaml"))
        );
    });
}

#[test]
fn test_invalid_env_port_is_rejected() {
    with_vars(vec![("LOADRAIL_RESOLVER_PORT", Some("not-a-port"))], || {
        let loader = ConfigLoader::new();
        assert!(matches!(
            loader.from_env(),
            Err(ConfigError::EnvError(_))
        ));
    });
}

#[test]
fn test_custom_prefix() {
    let vars = vec![
        ("APP_RESOLVER_SCHEME", Some("https")),
        ("LOADRAIL_RESOLVER_SCHEME", Some("http")),
    ];

    with_vars(vars, || {
        let loader = ConfigLoader::with_prefix("APP");
        let config = loader.from_env().unwrap();
        assert_eq!(config.resolver.scheme, "https");
    });
}

#[test]
fn test_yaml_config_serialization() {
    let config = LoadrailConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();

    // Parse it back
    let parsed: LoadrailConfig = serde_yaml::from_str(&yaml).unwrap();
    assert!(parsed.validate_all().is_ok());
}

#[test]
fn test_comprehensive_config() {
    let yaml = r#"
resolver:
  scheme: https
  port: 8443
  overrides:
    orders.staging.local: "https://10.0.0.7:8443"

documents:
  modeling_path: "models/webshop.yaml"
  mapping_path: "models/webshop-mapping.yaml"

logging:
  level: warn
  format: json
  structured: true
"#;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loadrail.yaml");
    fs::write(&config_path, yaml).unwrap();

    let loader = ConfigLoader::new();
    let config = loader.from_file(&config_path).unwrap();

    assert_eq!(config.resolver.scheme, "https");
    assert_eq!(config.resolver.port, Some(8443));
    assert_eq!(
        config.resolver.overrides["orders.staging.local"],
        "https://10.0.0.7:8443"
    );
    assert_eq!(
        config.documents.mapping_path,
        Some(PathBuf::from("models/webshop-mapping.yaml"))
    );
    assert_eq!(config.logging.level, LogLevel::Warn);
}

#[test]
fn test_invalid_config_file_fails_validation() {
    let yaml = r#"
resolver:
  scheme: gopher
"#;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loadrail.yaml");
    fs::write(&config_path, yaml).unwrap();

    let loader = ConfigLoader::new();
    assert!(matches!(
        loader.from_file(&config_path),
        Err(ConfigError::DomainError { .. })
    ));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loadrail.yaml");
    fs::write(&config_path, "resolver: [unclosed").unwrap();

    let loader = ConfigLoader::new();
    assert!(matches!(
        loader.from_file(&config_path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let loader = ConfigLoader::new();
    assert!(matches!(
        loader.from_file("/nonexistent/loadrail.yaml"),
        Err(ConfigError::FileReadError(_))
    ));
}

#[test]
fn test_generate_sample() {
    let sample = LoadrailConfig::generate_sample();
    assert!(sample.contains("resolver"));
    assert!(sample.contains("logging"));
}
