//! Translation demo
//!
//! Builds a modeling document and mapping catalog in code, translates
//! them with a scheme-based URL resolver, and prints the resulting
//! load-test configuration as YAML.

use loadrail_translator::{translate, SchemeUrlResolver, TranslateError};
use loadrail_types::{
    Activity, Artifact, Endpoint, HttpMethod, MappingDocument, MappingObject, ModeledLoadTest,
    ModelingDocument, Parametrization, ResponseMeasure, RuntimeQualityAnalysis, ServerInfo,
    Stimulus,
};

fn main() -> Result<(), TranslateError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mapping = MappingDocument {
        objects: vec![MappingObject {
            id: "orderService".to_string(),
            activities: vec![
                Activity::new("create", Endpoint::new(HttpMethod::Post, "/orders")),
                Activity::new("list", Endpoint::new(HttpMethod::Get, "/orders")),
                Activity::new("get", Endpoint::new(HttpMethod::Get, "/orders/{id}")),
                Activity::non_http("archive"),
            ],
        }],
        server_info: vec![
            ServerInfo::new("staging", "orders.staging.local"),
            ServerInfo::new("production", "orders.example.com"),
        ],
    };

    let modeling = ModelingDocument {
        version: 1,
        context: "webshop".to_string(),
        environment: "staging".to_string(),
        rqa: RuntimeQualityAnalysis {
            loadtests: vec![
                ModeledLoadTest {
                    description: "peak load on every order operation".to_string(),
                    stimulus: Stimulus(serde_json::json!({"loadProfile": "LOAD_PEAK"})),
                    response_measure: ResponseMeasure(
                        serde_json::json!({"responseTime": "satisfied"}),
                    ),
                    artifact: Artifact::any("orderService"),
                    parametrization: Parametrization::default(),
                },
                ModeledLoadTest {
                    description: "constant load fetching one order".to_string(),
                    stimulus: Stimulus(serde_json::json!({"loadProfile": "LOAD_CONSTANT"})),
                    response_measure: ResponseMeasure(
                        serde_json::json!({"responseTime": "tolerated"}),
                    ),
                    artifact: Artifact::specific("orderService", "get"),
                    parametrization: Parametrization {
                        path_variables: [("id".to_string(), "123".to_string())].into(),
                        ..Default::default()
                    },
                },
            ],
        },
    };

    let resolver = SchemeUrlResolver::new("https");
    let config = translate(&modeling, &mapping, &resolver)?;

    println!("Translated {} load tests against {}", config.load_tests.len(), config.base_url);
    println!();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => println!("{yaml}"),
        Err(e) => eprintln!("failed to render config: {e}"),
    }

    Ok(())
}
