//! Document and output types for the loadrail translation pipeline
//!
//! This crate defines the parsed shape of the two input documents: the
//! modeling document declaring load-test intents, and the mapping catalog
//! binding abstract objects to concrete endpoints. It also defines the
//! output configuration handed to downstream load-test tooling. It has
//! minimal dependencies and defines the domain language of the workspace.

pub mod enums;
pub mod loadtest;
pub mod mapping;
pub mod modeling;

// Re-export commonly used types at the crate root
pub use enums::{HttpMethod, ParseError};
pub use loadtest::{LoadTest, LoadTestConfig};
pub use mapping::{Activity, Endpoint, MappingDocument, MappingObject, ServerInfo};
pub use modeling::{
    ActivityRef, Artifact, ModeledLoadTest, ModelingDocument, Parametrization, ResponseMeasure,
    RuntimeQualityAnalysis, Stimulus,
};
