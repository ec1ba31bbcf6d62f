//! Mapping catalog: abstract objects bound to concrete endpoints
//!
//! The catalog is the bridge between the model's vocabulary and a running
//! system: every abstract object lists its activities, every HTTP-capable
//! activity carries an endpoint template, and server-info entries bind
//! environment names to hosts. Catalogs are read-only during translation;
//! endpoint templates are cloned before any per-test data is merged in, so
//! one catalog can safely back many translations.

use crate::enums::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog binding abstract objects to endpoints and environments to hosts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MappingDocument {
    /// Mapped objects, unique by id; lookups take the first match in order
    pub objects: Vec<MappingObject>,

    /// Environment → host bindings; duplicates resolve to the first entry
    pub server_info: Vec<ServerInfo>,
}

impl MappingDocument {
    /// First object with the given id, in catalog order
    pub fn object(&self, id: &str) -> Option<&MappingObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    /// First host bound to the given environment, in catalog order
    pub fn host(&self, environment: &str) -> Option<&str> {
        self.server_info
            .iter()
            .find(|info| info.environment == environment)
            .map(|info| info.host.as_str())
    }
}

/// One abstract object and its activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingObject {
    /// Unique object id referenced by modeling artifacts
    pub id: String,

    /// Activities in declaration order; fan-out preserves this order
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl MappingObject {
    /// First activity with the given id, in declaration order
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }
}

/// An operation on a mapping object, optionally bound to an HTTP endpoint
///
/// Activities without an endpoint (message handlers, batch jobs) exist in
/// the catalog for completeness; fan-out skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity id within its object
    pub id: String,

    /// Endpoint template, absent for non-HTTP activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
}

impl Activity {
    /// An activity bound to an HTTP endpoint
    pub fn new(id: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            id: id.into(),
            endpoint: Some(endpoint),
        }
    }

    /// An activity without an endpoint
    pub fn non_http(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            endpoint: None,
        }
    }
}

/// Environment → host binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Environment name as referenced by modeling documents
    pub environment: String,

    /// Host the environment runs on, scheme-less (e.g. `orders.staging.local`)
    pub host: String,
}

impl ServerInfo {
    pub fn new(environment: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            host: host.into(),
        }
    }
}

/// An HTTP endpoint template
///
/// In the catalog the three slot maps are empty; translation fills them on
/// a per-use copy from the intent's parametrization. Slots are replaced
/// wholesale, never merged key-by-key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// HTTP method of the operation
    pub method: HttpMethod,

    /// Path template relative to the resolved base URL, e.g. `/orders/{id}`
    pub route: String,

    /// Values for the route's path variables
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub path_variables: BTreeMap<String, String>,

    /// Query-parameter binding
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter: BTreeMap<String, String>,

    /// Payload binding
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub payload: BTreeMap<String, String>,
}

impl Endpoint {
    /// A bare endpoint template with empty slots
    pub fn new(method: HttpMethod, route: impl Into<String>) -> Self {
        Self {
            method,
            route: route.into(),
            path_variables: BTreeMap::new(),
            parameter: BTreeMap::new(),
            payload: BTreeMap::new(),
        }
    }
}
