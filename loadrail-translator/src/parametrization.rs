//! Parametrization merging: endpoint template + bindings → concrete endpoint

use crate::error::TranslateError;
use loadrail_types::{Endpoint, Parametrization};

/// Merge a load test's parametrization into an endpoint template.
///
/// The template stays untouched; the returned endpoint is a fresh value
/// with its three slot maps replaced wholesale by the parametrization's
/// maps. A parametrization may bind any number of path variables but at
/// most one parameter and at most one payload reference.
pub fn apply_parametrization(
    template: &Endpoint,
    parametrization: &Parametrization,
) -> Result<Endpoint, TranslateError> {
    if parametrization.parameter.len() > 1 || parametrization.payload.len() > 1 {
        return Err(TranslateError::TooManyReferences {
            parameter_keys: parametrization.parameter.keys().cloned().collect(),
            payload_keys: parametrization.payload.keys().cloned().collect(),
        });
    }

    let mut endpoint = template.clone();
    endpoint.path_variables = parametrization.path_variables.clone();
    endpoint.parameter = parametrization.parameter.clone();
    endpoint.payload = parametrization.payload.clone();
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadrail_types::HttpMethod;
    use std::collections::BTreeMap;

    fn bindings(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_parameter_binding_succeeds() {
        let template = Endpoint::new(HttpMethod::Get, "/orders/{id}");
        let parametrization = Parametrization {
            parameter: bindings(&[("id", "123")]),
            ..Default::default()
        };

        let endpoint = apply_parametrization(&template, &parametrization).unwrap();
        assert_eq!(endpoint.parameter, bindings(&[("id", "123")]));
        assert_eq!(endpoint.route, "/orders/{id}");
    }

    #[test]
    fn test_empty_parametrization_succeeds() {
        let template = Endpoint::new(HttpMethod::Get, "/orders");
        let endpoint = apply_parametrization(&template, &Parametrization::default()).unwrap();
        assert_eq!(endpoint, template);
    }

    #[test]
    fn test_two_parameters_fail_with_offending_keys() {
        let template = Endpoint::new(HttpMethod::Get, "/orders");
        let parametrization = Parametrization {
            parameter: bindings(&[("a", "1"), ("b", "2")]),
            ..Default::default()
        };

        let err = apply_parametrization(&template, &parametrization).unwrap_err();
        match err {
            TranslateError::TooManyReferences {
                parameter_keys,
                payload_keys,
            } => {
                assert_eq!(
                    parameter_keys.into_iter().collect::<Vec<_>>(),
                    vec!["a".to_string(), "b".to_string()]
                );
                assert!(payload_keys.is_empty());
            }
            other => panic!("expected TooManyReferences, got {other:?}"),
        }
    }

    #[test]
    fn test_two_payloads_fail() {
        let template = Endpoint::new(HttpMethod::Post, "/orders");
        let parametrization = Parametrization {
            payload: bindings(&[("order", "{}"), ("customer", "{}")]),
            ..Default::default()
        };

        assert!(matches!(
            apply_parametrization(&template, &parametrization),
            Err(TranslateError::TooManyReferences { .. })
        ));
    }

    #[test]
    fn test_path_variables_are_unconstrained() {
        let template = Endpoint::new(HttpMethod::Get, "/shops/{shop}/orders/{id}");
        let parametrization = Parametrization {
            path_variables: bindings(&[("shop", "main"), ("id", "42")]),
            ..Default::default()
        };

        let endpoint = apply_parametrization(&template, &parametrization).unwrap();
        assert_eq!(endpoint.path_variables.len(), 2);
    }

    #[test]
    fn test_slots_are_replaced_not_merged() {
        let mut template = Endpoint::new(HttpMethod::Get, "/orders/{id}");
        template.path_variables = bindings(&[("id", "old")]);
        template.parameter = bindings(&[("expand", "items")]);

        let parametrization = Parametrization {
            path_variables: bindings(&[("id", "new")]),
            ..Default::default()
        };

        let endpoint = apply_parametrization(&template, &parametrization).unwrap();
        assert_eq!(endpoint.path_variables, bindings(&[("id", "new")]));
        assert!(endpoint.parameter.is_empty());
    }

    #[test]
    fn test_template_is_never_mutated() {
        let template = Endpoint::new(HttpMethod::Get, "/orders/{id}");
        let pristine = template.clone();

        let parametrization = Parametrization {
            path_variables: bindings(&[("id", "42")]),
            ..Default::default()
        };
        apply_parametrization(&template, &parametrization).unwrap();

        assert_eq!(template, pristine);
    }
}
