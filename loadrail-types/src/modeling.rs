//! Modeling document: the declarative architecture model
//!
//! A modeling document declares intents: which abstract objects and
//! activities to put under load, with what stimulus and expectations.
//! Every concrete detail (hosts, routes, methods) lives in the mapping
//! catalog. Stimulus and response-measure values are opaque to translation
//! and carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Versioned architecture model declaring load-test intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelingDocument {
    /// Document format version
    pub version: u32,

    /// Bounded context the model describes
    pub context: String,

    /// Which server-info entry of the mapping catalog to target
    pub environment: String,

    /// Runtime quality analysis section holding the declared load tests
    #[serde(default)]
    pub rqa: RuntimeQualityAnalysis,
}

/// Runtime quality analysis section of the model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuntimeQualityAnalysis {
    /// Declared load-test intents, in document order
    #[serde(default)]
    pub loadtests: Vec<ModeledLoadTest>,
}

/// One declared load-test intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeledLoadTest {
    /// Human-readable description, copied into every resolved load test
    pub description: String,

    /// Opaque stimulus description (load profile and the like)
    #[serde(default)]
    pub stimulus: Stimulus,

    /// Opaque expectation description (response time targets and the like)
    #[serde(default)]
    pub response_measure: ResponseMeasure,

    /// Which object, and optionally which activity, the intent targets
    pub artifact: Artifact,

    /// Bindings merged into every endpoint this intent resolves to
    #[serde(default)]
    pub parametrization: Parametrization,
}

/// Reference to a target object and optionally one of its activities
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    /// Id of the mapping object the intent targets
    pub object: String,

    /// Activity selection; an absent field in the document means "all"
    #[serde(default, skip_serializing_if = "ActivityRef::is_any")]
    pub activity: ActivityRef,
}

impl Artifact {
    /// Reference every activity of an object
    pub fn any(object: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            activity: ActivityRef::Any,
        }
    }

    /// Reference one specific activity of an object
    pub fn specific(object: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            activity: ActivityRef::Specific(activity.into()),
        }
    }
}

/// Activity selection within an artifact
///
/// Modeled as a tagged variant rather than a nullable id so the two
/// resolution modes (fan-out vs. single activity) are exhaustive at the
/// type level. On the wire this is still an optional string field:
/// absent or null means [`ActivityRef::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ActivityRef {
    /// Fan out over every endpoint-bearing activity of the object
    #[default]
    Any,

    /// Target one activity by id
    Specific(String),
}

impl ActivityRef {
    /// True for the fan-out selection
    pub fn is_any(&self) -> bool {
        matches!(self, ActivityRef::Any)
    }

    /// The targeted activity id, if one is named
    pub fn as_specific(&self) -> Option<&str> {
        match self {
            ActivityRef::Any => None,
            ActivityRef::Specific(id) => Some(id),
        }
    }
}

impl From<Option<String>> for ActivityRef {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(id) => ActivityRef::Specific(id),
            None => ActivityRef::Any,
        }
    }
}

impl From<ActivityRef> for Option<String> {
    fn from(value: ActivityRef) -> Self {
        match value {
            ActivityRef::Any => None,
            ActivityRef::Specific(id) => Some(id),
        }
    }
}

/// Bindings a modeled load test supplies for its resolved endpoints
///
/// Keys are unique per map and insertion order carries no meaning, so the
/// maps are stored sorted; this also keeps hashing of resolved load tests
/// canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parametrization {
    /// Values for path template variables; unconstrained in count
    pub path_variables: BTreeMap<String, String>,

    /// Query-parameter binding; a load test binds at most one
    pub parameter: BTreeMap<String, String>,

    /// Payload binding; a load test binds at most one
    pub payload: BTreeMap<String, String>,
}

impl Parametrization {
    /// True when no binding of any kind is supplied
    pub fn is_empty(&self) -> bool {
        self.path_variables.is_empty() && self.parameter.is_empty() && self.payload.is_empty()
    }
}

/// Opaque stimulus description carried through translation untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stimulus(pub Value);

impl Eq for Stimulus {}

impl Hash for Stimulus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_json(&self.0, state);
    }
}

/// Opaque response-measure description carried through translation untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMeasure(pub Value);

impl Eq for ResponseMeasure {}

impl Hash for ResponseMeasure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_json(&self.0, state);
    }
}

/// Structural hash over a JSON value, consistent with `Value`'s equality.
/// Object keys iterate in sorted order, so the hash is canonical no matter
/// how the document spelled the object.
fn hash_json<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            if let Some(i) = n.as_i64() {
                i.hash(state);
            } else if let Some(u) = n.as_u64() {
                u.hash(state);
            } else if let Some(f) = n.as_f64() {
                f.to_bits().hash(state);
            }
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            state.write_usize(items.len());
            for item in items {
                hash_json(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
            for (key, item) in map {
                key.hash(state);
                hash_json(item, state);
            }
        }
    }
}
