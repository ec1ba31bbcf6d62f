//! Service wiring around the translation pipeline

use crate::error::{Result, TranslateError};
use crate::loader::DocumentLoader;
use crate::resolver::{resolver_from_config, UrlResolver};
use crate::translate::translate;
use loadrail_config::LoadrailConfig;
use loadrail_types::{LoadTestConfig, MappingDocument, ModelingDocument};
use std::path::Path;
use std::sync::Arc;

/// Translation service owning the injected URL resolver.
///
/// A `Translator` is cheap to clone and safe to share; translations hold
/// no state beyond their arguments.
#[derive(Clone)]
pub struct Translator {
    url_resolver: Arc<dyn UrlResolver>,
    loader: DocumentLoader,
}

impl Translator {
    /// Create a translator with an explicit URL resolver
    pub fn new(url_resolver: Arc<dyn UrlResolver>) -> Self {
        Self {
            url_resolver,
            loader: DocumentLoader::new(),
        }
    }

    /// Create a translator with the resolver a configuration describes
    pub fn from_config(config: &LoadrailConfig) -> Self {
        Self::new(resolver_from_config(&config.resolver))
    }

    /// Translate already-parsed documents
    pub fn translate(
        &self,
        modeling: &ModelingDocument,
        mapping: &MappingDocument,
    ) -> std::result::Result<LoadTestConfig, TranslateError> {
        translate(modeling, mapping, self.url_resolver.as_ref())
    }

    /// Load both documents from disk and translate them
    pub fn translate_files(
        &self,
        modeling_path: impl AsRef<Path>,
        mapping_path: impl AsRef<Path>,
    ) -> Result<LoadTestConfig> {
        let modeling = self.loader.load_modeling(modeling_path)?;
        let mapping = self.loader.load_mapping(mapping_path)?;
        Ok(self.translate(&modeling, &mapping)?)
    }
}
