//! Environment resolution: environment name → host

use crate::error::TranslateError;
use loadrail_types::MappingDocument;
use tracing::debug;

/// Resolve the host bound to an environment name.
///
/// Server-info entries are scanned in catalog order and the first match
/// wins; duplicate environment entries shadow later ones.
pub fn resolve_host<'a>(
    mapping: &'a MappingDocument,
    environment: &str,
) -> Result<&'a str, TranslateError> {
    match mapping.host(environment) {
        Some(host) => {
            debug!(environment, host, "resolved environment host");
            Ok(host)
        }
        None => Err(TranslateError::EnvironmentNotFound(environment.to_string())),
    }
}
