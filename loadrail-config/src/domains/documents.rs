//! Default document locations

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional default paths for the two input documents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Default modeling document path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modeling_path: Option<PathBuf>,

    /// Default mapping document path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_path: Option<PathBuf>,
}

impl Validatable for DocumentsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.modeling_path {
            validate_required_string(&path.to_string_lossy(), "modeling_path", self.domain_name())?;
        }
        if let Some(path) = &self.mapping_path {
            validate_required_string(&path.to_string_lossy(), "mapping_path", self.domain_name())?;
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "documents"
    }
}
