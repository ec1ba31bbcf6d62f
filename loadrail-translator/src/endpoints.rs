//! Endpoint resolution: artifact reference → endpoint templates

use crate::error::TranslateError;
use loadrail_types::{ActivityRef, Artifact, Endpoint, MappingDocument};
use tracing::{debug, warn};

/// Resolve an artifact reference to its endpoint templates.
///
/// With a specific activity this returns exactly one template; targeting
/// an activity without an endpoint is a hard error. With
/// [`ActivityRef::Any`] it fans out over every activity of the object in
/// declaration order, skipping activities without an endpoint. An object
/// with only non-HTTP activities resolves to an empty list, not an error.
pub fn resolve_endpoints<'a>(
    mapping: &'a MappingDocument,
    artifact: &Artifact,
) -> Result<Vec<&'a Endpoint>, TranslateError> {
    let object = mapping
        .object(&artifact.object)
        .ok_or_else(|| TranslateError::IdNotFound(artifact.object.clone()))?;

    match &artifact.activity {
        ActivityRef::Specific(activity_id) => {
            let activity = object
                .activity(activity_id)
                .ok_or_else(|| TranslateError::IdNotFound(activity_id.clone()))?;

            let endpoint = activity.endpoint.as_ref().ok_or_else(|| {
                TranslateError::NoEndpointForActivity {
                    object: object.id.clone(),
                    activity: activity.id.clone(),
                }
            })?;

            debug!(
                object = %object.id,
                activity = %activity.id,
                route = %endpoint.route,
                "resolved single activity endpoint"
            );
            Ok(vec![endpoint])
        }
        ActivityRef::Any => {
            let mut endpoints = Vec::with_capacity(object.activities.len());
            for activity in &object.activities {
                match &activity.endpoint {
                    Some(endpoint) => endpoints.push(endpoint),
                    None => {
                        warn!(
                            object = %object.id,
                            activity = %activity.id,
                            "skipping activity without endpoint in fan-out"
                        );
                    }
                }
            }

            debug!(
                object = %object.id,
                count = endpoints.len(),
                "fanned out over object activities"
            );
            Ok(endpoints)
        }
    }
}
