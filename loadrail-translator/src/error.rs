//! Error types for the translation pipeline

use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors aborting a translation; no partial configuration is returned
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Environment not found in server info: {0}")]
    EnvironmentNotFound(String),

    #[error("Id not found in mapping catalog: {0}")]
    IdNotFound(String),

    #[error("Too many references: at most one parameter and one payload binding allowed, got parameters {parameter_keys:?} and payloads {payload_keys:?}")]
    TooManyReferences {
        parameter_keys: BTreeSet<String>,
        payload_keys: BTreeSet<String>,
    },

    #[error("Activity '{activity}' of object '{object}' has no endpoint")]
    NoEndpointForActivity { object: String, activity: String },

    #[error("URL resolution failed: {0}")]
    UrlResolution(#[from] UrlResolveError),
}

/// Errors from the injected URL resolution service
#[derive(Error, Debug)]
pub enum UrlResolveError {
    #[error("Invalid host: '{0}'")]
    InvalidHost(String),

    #[error("Unknown host: '{0}'")]
    UnknownHost(String),

    #[error("Resolved base URL for host '{host}' is invalid: {source}")]
    InvalidBaseUrl {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors reading documents from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML document {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Cannot determine document format of {0}")]
    UnknownFormat(PathBuf),
}

/// Combined error for file-based translation through the service
#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
