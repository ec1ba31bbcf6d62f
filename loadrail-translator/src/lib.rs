//! Translation pipeline from declarative quality models to load-test
//! configurations
//!
//! Given a modeling document (load-test intents against abstract objects
//! and activities) and a mapping catalog (objects bound to HTTP endpoint
//! templates, environments bound to hosts), [`translate`] produces the
//! concrete [`LoadTestConfig`](loadrail_types::LoadTestConfig) a
//! downstream load-test runner consumes: a resolved base URL plus one
//! load test per selected endpoint with the intent's parametrization
//! merged in.
//!
//! The pipeline is synchronous and side-effect free apart from a single
//! call to the injected [`UrlResolver`]; mapping catalogs are never
//! mutated and can be shared across concurrent translations.

pub mod endpoints;
pub mod environment;
pub mod error;
pub mod loader;
pub mod parametrization;
pub mod resolver;
pub mod service;
pub mod translate;

// Re-export the pipeline surface at the crate root
pub use endpoints::resolve_endpoints;
pub use environment::resolve_host;
pub use error::{LoadError, Result, TranslateError, TranslatorError, UrlResolveError};
pub use loader::DocumentLoader;
pub use parametrization::apply_parametrization;
pub use resolver::{resolver_from_config, SchemeUrlResolver, TableUrlResolver, UrlResolver};
pub use service::Translator;
pub use translate::translate;
