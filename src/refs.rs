//! # Placeholder Reference Rewriting
//!
//! Authored schemas refer to other models with the version-agnostic
//! `{{model: Name}}` token. Before a model map is emitted, every such
//! token anywhere inside a schema tree is resolved to a
//! `#/components/schemas/Name` pointer. Plain `$ref` strings (absolute
//! URLs, existing JSON pointers) are left untouched.

use serde_json::Value;

/// Rewrites `{{model: Name}}` placeholders throughout a schema tree.
///
/// Pure recursive transform: returns a new tree, the input is never
/// mutated. Strings that are not exactly a placeholder are copied as-is.
pub fn rewrite_model_refs(schema: &Value) -> Value {
    match schema {
        Value::String(text) => match placeholder_name(text) {
            Some(name) => Value::String(format!("#/components/schemas/{}", name)),
            None => schema.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(rewrite_model_refs).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), rewrite_model_refs(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Extracts the model name from a `{{model: Name}}` token, or `None` when
/// the string is not a placeholder.
fn placeholder_name(text: &str) -> Option<&str> {
    let inner = text.trim().strip_prefix("{{")?.strip_suffix("}}")?;
    let name = inner.trim_start().strip_prefix("model:")?.trim();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some(name)
}
