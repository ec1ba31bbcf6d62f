//! Document loading from disk
//!
//! Parsing itself is plain serde; this module adds format detection and
//! the catalog sanity warnings that are cheapest to emit at load time.

use crate::error::LoadError;
use loadrail_types::{MappingDocument, ModelingDocument};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Document format as detected from extension or content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

/// Loads modeling and mapping documents from disk
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a modeling document from a JSON or YAML file
    pub fn load_modeling(&self, path: impl AsRef<Path>) -> Result<ModelingDocument, LoadError> {
        let path = path.as_ref();
        let document: ModelingDocument = self.load_document(path)?;
        info!(
            path = %path.display(),
            environment = %document.environment,
            intents = document.rqa.loadtests.len(),
            "loaded modeling document"
        );
        Ok(document)
    }

    /// Load a mapping catalog from a JSON or YAML file
    pub fn load_mapping(&self, path: impl AsRef<Path>) -> Result<MappingDocument, LoadError> {
        let path = path.as_ref();
        let document: MappingDocument = self.load_document(path)?;
        warn_on_duplicates(&document);
        info!(
            path = %path.display(),
            objects = document.objects.len(),
            environments = document.server_info.len(),
            "loaded mapping document"
        );
        Ok(document)
    }

    fn load_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match detect_format(&content, path) {
            Some(DocumentFormat::Json) => {
                serde_json::from_str(&content).map_err(|source| LoadError::Json {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Some(DocumentFormat::Yaml) => {
                serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
            None => Err(LoadError::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// Detect the document format from the file extension, falling back to
/// the content's shape when the extension is inconclusive.
fn detect_format(content: &str, path: &Path) -> Option<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    match extension {
        "json" => Some(DocumentFormat::Json),
        "yaml" | "yml" => Some(DocumentFormat::Yaml),
        _ => {
            let trimmed = content.trim_start();
            if trimmed.starts_with('{') {
                Some(DocumentFormat::Json)
            } else if !trimmed.is_empty() {
                // YAML is a superset shape; let the parser decide
                Some(DocumentFormat::Yaml)
            } else {
                None
            }
        }
    }
}

/// Duplicate ids resolve first-match-wins at translation time; surface
/// them here so shadowed entries do not go unnoticed.
fn warn_on_duplicates(mapping: &MappingDocument) {
    let mut environments = HashSet::new();
    for info in &mapping.server_info {
        if !environments.insert(info.environment.as_str()) {
            warn!(
                environment = %info.environment,
                "duplicate server-info environment; first entry wins"
            );
        }
    }

    let mut object_ids = HashSet::new();
    for object in &mapping.objects {
        if !object_ids.insert(object.id.as_str()) {
            warn!(object = %object.id, "duplicate object id; first entry wins");
        }

        let mut activity_ids = HashSet::new();
        for activity in &object.activities {
            if !activity_ids.insert(activity.id.as_str()) {
                warn!(
                    object = %object.id,
                    activity = %activity.id,
                    "duplicate activity id; first entry wins"
                );
            }
        }
    }
}
