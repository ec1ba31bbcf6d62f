//! The translation orchestrator

use crate::endpoints::resolve_endpoints;
use crate::environment::resolve_host;
use crate::error::TranslateError;
use crate::parametrization::apply_parametrization;
use crate::resolver::UrlResolver;
use loadrail_types::{LoadTest, LoadTestConfig, MappingDocument, ModelingDocument};
use std::collections::HashSet;
use tracing::{debug, info};

/// Translate a modeling document against a mapping catalog into a
/// load-test configuration.
///
/// Each declared intent resolves to one load test per endpoint its
/// artifact reference selects; structurally identical load tests collapse
/// to a single entry, keeping first-resolution order. Any failure aborts
/// the whole call without returning a partial configuration.
///
/// The mapping is borrowed immutably throughout, so one catalog (for
/// example behind an `Arc`) can back concurrent translations.
pub fn translate(
    modeling: &ModelingDocument,
    mapping: &MappingDocument,
    url_resolver: &dyn UrlResolver,
) -> Result<LoadTestConfig, TranslateError> {
    let host = resolve_host(mapping, &modeling.environment)?;
    let base_url = url_resolver.resolve(host)?;

    let mut load_tests = Vec::new();
    let mut seen = HashSet::new();

    for modeled in &modeling.rqa.loadtests {
        let endpoints = resolve_endpoints(mapping, &modeled.artifact)?;
        debug!(
            description = %modeled.description,
            object = %modeled.artifact.object,
            endpoints = endpoints.len(),
            "resolved modeled load test"
        );

        for template in endpoints {
            let endpoint = apply_parametrization(template, &modeled.parametrization)?;
            let load_test = LoadTest::new(
                modeled.artifact.clone(),
                modeled.description.clone(),
                modeled.stimulus.clone(),
                modeled.response_measure.clone(),
                endpoint,
            );

            if seen.insert(load_test.clone()) {
                load_tests.push(load_test);
            }
        }
    }

    info!(
        environment = %modeling.environment,
        base_url = %base_url,
        intents = modeling.rqa.loadtests.len(),
        load_tests = load_tests.len(),
        "translated modeling document"
    );

    Ok(LoadTestConfig {
        version: modeling.version,
        context: modeling.context.clone(),
        environment: modeling.environment.clone(),
        base_url,
        load_tests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlResolveError;
    use loadrail_types::{
        Activity, Artifact, Endpoint, HttpMethod, MappingObject, ModeledLoadTest, Parametrization,
        RuntimeQualityAnalysis, ServerInfo, Stimulus,
    };

    struct StaticResolver;

    impl UrlResolver for StaticResolver {
        fn resolve(&self, host: &str) -> Result<String, UrlResolveError> {
            Ok(format!("http://{host}"))
        }
    }

    struct FailingResolver;

    impl UrlResolver for FailingResolver {
        fn resolve(&self, host: &str) -> Result<String, UrlResolveError> {
            Err(UrlResolveError::UnknownHost(host.to_string()))
        }
    }

    fn mapping() -> MappingDocument {
        MappingDocument {
            objects: vec![MappingObject {
                id: "orderService".to_string(),
                activities: vec![
                    Activity::new("create", Endpoint::new(HttpMethod::Post, "/orders")),
                    Activity::new("list", Endpoint::new(HttpMethod::Get, "/orders")),
                    Activity::non_http("archive"),
                ],
            }],
            server_info: vec![ServerInfo::new("staging", "orders.staging.local")],
        }
    }

    fn modeling(loadtests: Vec<ModeledLoadTest>) -> ModelingDocument {
        ModelingDocument {
            version: 1,
            context: "webshop".to_string(),
            environment: "staging".to_string(),
            rqa: RuntimeQualityAnalysis { loadtests },
        }
    }

    fn intent(artifact: Artifact) -> ModeledLoadTest {
        ModeledLoadTest {
            description: "order load".to_string(),
            stimulus: Stimulus::default(),
            response_measure: Default::default(),
            artifact,
            parametrization: Parametrization::default(),
        }
    }

    #[test]
    fn test_fan_out_intent_expands_per_activity() {
        let config = translate(
            &modeling(vec![intent(Artifact::any("orderService"))]),
            &mapping(),
            &StaticResolver,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://orders.staging.local");
        assert_eq!(config.load_tests.len(), 2);
        assert_eq!(config.load_tests[0].endpoint.method, HttpMethod::Post);
        assert_eq!(config.load_tests[1].endpoint.method, HttpMethod::Get);
    }

    #[test]
    fn test_duplicate_intents_collapse() {
        let config = translate(
            &modeling(vec![
                intent(Artifact::specific("orderService", "create")),
                intent(Artifact::specific("orderService", "create")),
            ]),
            &mapping(),
            &StaticResolver,
        )
        .unwrap();

        assert_eq!(config.load_tests.len(), 1);
    }

    #[test]
    fn test_resolver_failure_aborts_translation() {
        let err = translate(
            &modeling(vec![intent(Artifact::any("orderService"))]),
            &mapping(),
            &FailingResolver,
        )
        .unwrap_err();

        assert!(matches!(err, TranslateError::UrlResolution(_)));
    }

    #[test]
    fn test_unknown_object_aborts_whole_translation() {
        let err = translate(
            &modeling(vec![
                intent(Artifact::any("orderService")),
                intent(Artifact::any("missing")),
            ]),
            &mapping(),
            &StaticResolver,
        )
        .unwrap_err();

        assert!(matches!(err, TranslateError::IdNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_translate_is_idempotent() {
        let modeling = modeling(vec![intent(Artifact::any("orderService"))]);
        let mapping = mapping();

        let first = translate(&modeling, &mapping, &StaticResolver).unwrap();
        let second = translate(&modeling, &mapping, &StaticResolver).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_header_fields_copied_from_modeling() {
        let config = translate(&modeling(vec![]), &mapping(), &StaticResolver).unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.context, "webshop");
        assert_eq!(config.environment, "staging");
        assert!(config.load_tests.is_empty());
    }
}
