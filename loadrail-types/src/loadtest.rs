//! Output configuration consumed by downstream load-test tooling

use crate::mapping::Endpoint;
use crate::modeling::{Artifact, ResponseMeasure, Stimulus};
use serde::{Deserialize, Serialize};

/// One fully resolved load test
///
/// Identity is structural: two load tests with the same artifact,
/// description, opaque values, and resolved endpoint are the same load
/// test, and the output collection collapses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTest {
    /// The artifact reference the intent declared
    pub artifact: Artifact,

    /// Description inherited from the intent
    pub description: String,

    /// Stimulus inherited from the intent
    pub stimulus: Stimulus,

    /// Response measure inherited from the intent
    pub response_measure: ResponseMeasure,

    /// Resolved endpoint with parametrization applied
    pub endpoint: Endpoint,
}

impl LoadTest {
    pub fn new(
        artifact: Artifact,
        description: impl Into<String>,
        stimulus: Stimulus,
        response_measure: ResponseMeasure,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            artifact,
            description: description.into(),
            stimulus,
            response_measure,
            endpoint,
        }
    }
}

/// Final translation output: everything a load-test runner needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTestConfig {
    /// Version copied from the modeling document
    pub version: u32,

    /// Context copied from the modeling document
    pub context: String,

    /// Environment the configuration targets
    pub environment: String,

    /// Base URL every load test's route is relative to
    pub base_url: String,

    /// Resolved load tests, deduplicated, in resolution order
    pub load_tests: Vec<LoadTest>,
}
