//! URL resolution service: resolved host → base URL
//!
//! Translation delegates base-URL construction to an injected
//! [`UrlResolver`] so the pipeline stays a pure function of its inputs.
//! Two local implementations ship with the crate; a deployment may bring
//! its own (service discovery, health-aware lookup, and the like).

use crate::error::UrlResolveError;
use loadrail_config::ResolverConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Capability resolving a host string into a base URL
pub trait UrlResolver: Send + Sync {
    fn resolve(&self, host: &str) -> Result<String, UrlResolveError>;
}

/// Builds `scheme://host[:port]` base URLs
#[derive(Debug, Clone)]
pub struct SchemeUrlResolver {
    scheme: String,
    port: Option<u16>,
}

impl SchemeUrlResolver {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            port: None,
        }
    }

    pub fn with_port(scheme: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            port: Some(port),
        }
    }
}

impl Default for SchemeUrlResolver {
    fn default() -> Self {
        Self::new("http")
    }
}

impl UrlResolver for SchemeUrlResolver {
    fn resolve(&self, host: &str) -> Result<String, UrlResolveError> {
        if host.is_empty() || host.contains(['/', '?', '#']) || host.contains(char::is_whitespace) {
            return Err(UrlResolveError::InvalidHost(host.to_string()));
        }

        let base_url = match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, host, port),
            None => format!("{}://{}", self.scheme, host),
        };

        // Validate before handing the URL onward
        Url::parse(&base_url).map_err(|source| UrlResolveError::InvalidBaseUrl {
            host: host.to_string(),
            source,
        })?;

        debug!(host, base_url, "resolved base url");
        Ok(base_url)
    }
}

/// Fixed host → base-URL table with optional fallthrough
///
/// Hosts absent from the table are handed to the fallback resolver when
/// one is configured and fail with `UnknownHost` otherwise. The pure
/// table form doubles as a deterministic resolver for tests.
pub struct TableUrlResolver {
    entries: HashMap<String, String>,
    fallback: Option<Arc<dyn UrlResolver>>,
}

impl TableUrlResolver {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            entries,
            fallback: None,
        }
    }

    pub fn with_fallback(entries: HashMap<String, String>, fallback: Arc<dyn UrlResolver>) -> Self {
        Self {
            entries,
            fallback: Some(fallback),
        }
    }

    /// Add a single host → base-URL entry
    pub fn add_entry(&mut self, host: impl Into<String>, base_url: impl Into<String>) {
        self.entries.insert(host.into(), base_url.into());
    }
}

impl UrlResolver for TableUrlResolver {
    fn resolve(&self, host: &str) -> Result<String, UrlResolveError> {
        if let Some(base_url) = self.entries.get(host) {
            debug!(host, base_url, "resolved base url from table");
            return Ok(base_url.clone());
        }

        match &self.fallback {
            Some(fallback) => fallback.resolve(host),
            None => Err(UrlResolveError::UnknownHost(host.to_string())),
        }
    }
}

/// Build the resolver a configuration describes: a plain scheme resolver,
/// fronted by an override table when one is configured.
pub fn resolver_from_config(config: &ResolverConfig) -> Arc<dyn UrlResolver> {
    let scheme_resolver = match config.port {
        Some(port) => SchemeUrlResolver::with_port(config.scheme.clone(), port),
        None => SchemeUrlResolver::new(config.scheme.clone()),
    };

    if config.overrides.is_empty() {
        Arc::new(scheme_resolver)
    } else {
        let entries = config
            .overrides
            .iter()
            .map(|(host, base_url)| (host.clone(), base_url.clone()))
            .collect();
        Arc::new(TableUrlResolver::with_fallback(
            entries,
            Arc::new(scheme_resolver),
        ))
    }
}
