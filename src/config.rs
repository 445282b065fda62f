//! # Service Configuration
//!
//! The slice of a Serverless-style service configuration that the
//! documentation exporter reads. Only the fields the mapper consumes are
//! typed; the documentation fragments themselves stay `serde_json::Value`
//! so that authored metadata passes through verbatim and malformed
//! entries can be skipped instead of failing deserialization.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The service configuration tree supplied by the deployment framework.
///
/// Function order is preserved (`IndexMap`): it determines path/operation
/// enumeration order and therefore which entry wins on key collisions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// Custom variables; carries the documentation template.
    #[serde(default)]
    pub custom: CustomVars,

    /// Deployable functions, in declaration order.
    #[serde(default)]
    pub functions: IndexMap<String, FunctionConfig>,
}

/// The `custom` section of the service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomVars {
    /// The documentation template, when the service declares one.
    #[serde(default)]
    pub documentation: Option<DocumentationTemplate>,
}

/// Top-level documentation template: API metadata, reusable models and
/// security schemes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationTemplate {
    /// API-level metadata (`info`, `tags`), copied with defaults applied.
    #[serde(default)]
    pub api: Option<Value>,

    /// Named reusable schema fragments, an ordered sequence of
    /// `{name, schema}` objects.
    #[serde(default)]
    pub models: Option<Value>,

    /// Security scheme declarations, copied verbatim into the output.
    #[serde(default)]
    pub security_schemes: Option<Value>,
}

/// A single deployable function.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionConfig {
    /// The function's triggering events, in declaration order.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A function event. Only `http` events contribute to the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    /// The `http` sub-object: `{path, method, documentation?}`. Kept as a
    /// raw value so shorthand or malformed events are skipped, not errors.
    #[serde(default)]
    pub http: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_minimal_service() {
        let service: ServiceConfig = serde_json::from_value(json!({
            "functions": {
                "getUser": {
                    "handler": "handler.getUser",
                    "events": [
                        {"http": {"path": "users/{id}", "method": "GET", "documentation": {}}},
                        {"schedule": "rate(1 hour)"}
                    ]
                }
            },
            "custom": {
                "documentation": {
                    "api": {"info": {"title": "Users"}},
                    "securitySchemes": {}
                }
            }
        }))
        .unwrap();

        assert_eq!(service.functions.len(), 1);
        let function = &service.functions["getUser"];
        assert_eq!(function.events.len(), 2);
        assert!(function.events[0].http.is_some());
        assert!(function.events[1].http.is_none());

        let template = service.custom.documentation.unwrap();
        assert_eq!(template.security_schemes, Some(json!({})));
        assert!(template.models.is_none());
    }

    #[test]
    fn function_order_is_preserved() {
        let service: ServiceConfig = serde_json::from_value(json!({
            "functions": {"zeta": {}, "alpha": {}, "mid": {}}
        }))
        .unwrap();
        let names: Vec<&String> = service.functions.keys().collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
