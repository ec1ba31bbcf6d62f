//! Domain-driven configuration management for loadrail
//!
//! This crate provides modular configuration split by functional domains,
//! with validation, defaults, and environment variable support. The
//! translation core itself never reads configuration; this layer exists
//! for the service wiring and resolver construction around it.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    documents::DocumentsConfig, logging::LoggingConfig, resolver::ResolverConfig, LoadrailConfig,
};
