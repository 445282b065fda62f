//! Path, operation, parameter, response and body mapping.
//!
//! One operation entry is produced per documented `http` event, keyed by
//! `/` + path, then by lower-cased method. Later events silently replace
//! earlier ones on an identical path+method key; distinct methods on one
//! path share a path item.

use super::truthy;
use crate::config::ServiceConfig;
use crate::version::SpecVersion;
use serde_json::{json, Map, Value};

/// The fixed set of parameter fields copied onto the parameter object
/// itself. Everything else a declaration carries feeds schema synthesis.
const OPTIONAL_PARAM_FIELDS: [&str; 10] = [
    "description",
    "required",
    "deprecated",
    "allowEmptyValue",
    "style",
    "explode",
    "allowReserved",
    "example",
    "examples",
    "content",
];

/// Documentation fields copied onto the operation when present.
const OPERATION_FIELDS: [&str; 4] = ["tags", "summary", "description", "deprecated"];

/// Parameter declaration blocks and their `in` locations, in the order
/// they are appended to the shared `parameters` array.
const PARAM_LOCATIONS: [(&str, &str); 3] = [
    ("queryParams", "query"),
    ("pathParams", "path"),
    ("requestHeaders", "header"),
];

/// Builds the `paths` object from every documented `http` event.
pub(super) fn build_paths(version: SpecVersion, service: &ServiceConfig) -> Value {
    let mut paths = Map::new();

    for (function_name, function) in &service.functions {
        for event in &function.events {
            let Some(http) = event.http.as_ref().and_then(Value::as_object) else {
                continue;
            };
            let Some(documentation) = http.get("documentation").filter(|v| truthy(v)) else {
                continue;
            };
            let (Some(path), Some(method)) = (
                http.get("path").and_then(Value::as_str),
                http.get("method").and_then(Value::as_str),
            ) else {
                continue;
            };

            let operation = build_operation(version, function_name, documentation);
            let item = paths
                .entry(format!("/{}", path))
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(item) = item.as_object_mut() {
                item.insert(method.to_lowercase(), operation);
            }
        }
    }

    Value::Object(paths)
}

fn build_operation(version: SpecVersion, function_name: &str, documentation: &Value) -> Value {
    let mut operation = Map::new();
    operation.insert("operationId".to_string(), json!(function_name));

    for field in OPERATION_FIELDS {
        if let Some(value) = documentation.get(field).filter(|v| truthy(v)) {
            operation.insert(field.to_string(), value.clone());
        }
    }

    // A present-but-empty declaration block still materializes the array.
    for (field, location) in PARAM_LOCATIONS {
        let Some(declarations) = documentation.get(field).filter(|v| truthy(v)) else {
            continue;
        };
        let block = build_parameters(version, location, declarations);
        extend_parameters(&mut operation, block);
    }

    if let Some(body) = documentation.get("requestBody").filter(|v| truthy(v)) {
        let models = documentation.get("requestModels");
        if version.is_swagger() {
            extend_parameters(&mut operation, vec![build_body_parameter(body, models)]);
        } else {
            operation.insert("requestBody".to_string(), build_request_body(body, models));
        }
    }

    operation.insert(
        "responses".to_string(),
        build_responses(version, documentation.get("methodResponses")),
    );

    Value::Object(operation)
}

fn extend_parameters(operation: &mut Map<String, Value>, block: Vec<Value>) {
    let entry = operation
        .entry("parameters")
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Some(list) = entry.as_array_mut() {
        list.extend(block);
    }
}

fn build_parameters(version: SpecVersion, location: &str, declarations: &Value) -> Vec<Value> {
    let mut parameters = Vec::new();
    let Some(entries) = declarations.as_array() else {
        return parameters;
    };

    let mut schema_exclude = vec!["name"];
    schema_exclude.extend(OPTIONAL_PARAM_FIELDS);

    for declaration in entries {
        let Some(name) = declaration.get("name").filter(|v| truthy(v)) else {
            continue;
        };

        let mut parameter = Map::new();
        parameter.insert("name".to_string(), name.clone());
        parameter.insert("in".to_string(), json!(location));

        for field in OPTIONAL_PARAM_FIELDS {
            if let Some(value) = declaration.get(field).filter(|v| truthy(v)) {
                parameter.insert(field.to_string(), value.clone());
            }
        }

        // Path parameters are always mandatory regardless of declaration.
        let declared_required = declaration.get("required").map(truthy).unwrap_or(false);
        if !declared_required && location == "path" {
            parameter.insert("required".to_string(), json!(true));
        }

        let schema = resolve_schema(declaration, &schema_exclude);
        apply_schema(version, &mut parameter, schema);

        parameters.push(Value::Object(parameter));
    }

    parameters
}

fn build_responses(version: SpecVersion, method_responses: Option<&Value>) -> Value {
    let mut responses = Map::new();
    let Some(Value::Array(entries)) = method_responses else {
        return Value::Object(responses);
    };

    for declaration in entries {
        let Some(status) = declaration.get("statusCode").filter(|v| truthy(v)) else {
            continue;
        };
        let code = key_string(status);

        let mut response = Map::new();
        let description = declaration
            .get("responseBody")
            .and_then(|body| body.get("description"))
            .filter(|v| truthy(v))
            .cloned()
            .unwrap_or_else(|| json!(format!("Status {} response", code)));
        response.insert("description".to_string(), description);

        if let Some(models) = declaration.get("responseModels").filter(|v| truthy(v)) {
            response.insert("content".to_string(), build_model_content(models));
        }
        if let Some(headers) = declaration.get("responseHeaders").filter(|v| truthy(v)) {
            response.insert("headers".to_string(), build_response_headers(version, headers));
        }

        responses.insert(code, Value::Object(response));
    }

    Value::Object(responses)
}

fn build_response_headers(version: SpecVersion, declarations: &Value) -> Value {
    let mut headers = Map::new();
    let Some(entries) = declarations.as_array() else {
        return Value::Object(headers);
    };

    for declaration in entries {
        let Some(name) = declaration.get("name").filter(|v| truthy(v)) else {
            continue;
        };

        let mut header = Map::new();
        if let Some(description) = declaration.get("description").filter(|v| truthy(v)) {
            header.insert("description".to_string(), description.clone());
        }
        let schema = resolve_schema(declaration, &["name", "description"]);
        apply_schema(version, &mut header, schema);

        headers.insert(key_string(name), Value::Object(header));
    }

    Value::Object(headers)
}

/// The 2.0 rendition of a request body: a synthetic parameter appended to
/// the shared `parameters` array. Only the first declared content type is
/// representable; any others are dropped.
fn build_body_parameter(body: &Value, models: Option<&Value>) -> Value {
    let mut parameter = Map::new();
    parameter.insert("name".to_string(), json!(""));
    parameter.insert("in".to_string(), json!("body"));
    parameter.insert("schema".to_string(), json!({}));

    if let Some(description) = body.get("description").filter(|v| truthy(v)) {
        parameter.insert("description".to_string(), description.clone());
    }

    if let Some((_, model)) = models.and_then(Value::as_object).and_then(|m| m.iter().next()) {
        let name = key_string(model);
        parameter.insert("name".to_string(), json!(name));
        parameter.insert("schema".to_string(), model_ref_schema(&name));
    }

    Value::Object(parameter)
}

/// The 3.0 rendition: a dedicated `requestBody` object carrying every
/// declared content type.
fn build_request_body(body: &Value, models: Option<&Value>) -> Value {
    let mut request_body = Map::new();
    if let Some(description) = body.get("description").filter(|v| truthy(v)) {
        request_body.insert("description".to_string(), description.clone());
    }
    let content = models
        .map(build_model_content)
        .unwrap_or_else(|| json!({}));
    request_body.insert("content".to_string(), content);

    Value::Object(request_body)
}

/// Maps content-type -> model name declarations to a `content` object of
/// schema references. The reference prefix is the same for both versions.
fn build_model_content(models: &Value) -> Value {
    let mut content = Map::new();
    if let Some(entries) = models.as_object() {
        for (content_type, model) in entries {
            let name = key_string(model);
            content.insert(content_type.clone(), json!({"schema": model_ref_schema(&name)}));
        }
    }
    Value::Object(content)
}

fn model_ref_schema(name: &str) -> Value {
    json!({"$ref": format!("#/components/schemas/{}", name)})
}

/// Resolves a declaration's schema: an explicit `schema` sub-object wins,
/// otherwise one is synthesized from every declared field outside the
/// exclusion list (bare `type`-level fields become an inline schema).
fn resolve_schema(declaration: &Value, exclude: &[&str]) -> Value {
    if let Some(schema) = declaration.get("schema").filter(|v| truthy(v)) {
        return schema.clone();
    }

    let mut schema = Map::new();
    if let Some(fields) = declaration.as_object() {
        for (key, value) in fields {
            if !exclude.contains(&key.as_str()) {
                schema.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Object(schema)
}

/// 2.0 flattens the resolved schema onto the carrying object; 3.0 nests
/// it under `schema`.
fn apply_schema(version: SpecVersion, target: &mut Map<String, Value>, schema: Value) {
    if version.is_swagger() {
        if let Value::Object(fields) = schema {
            for (key, value) in fields {
                target.insert(key, value);
            }
        }
    } else {
        target.insert("schema".to_string(), schema);
    }
}

fn key_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
