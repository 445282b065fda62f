//! # Document Assembly
//!
//! Builds the complete OpenAPI/Swagger document tree from the service
//! configuration, then serializes and writes it. Construction is a
//! single pass over read-only input; the document is assembled fully in
//! memory before anything is written.
//!
//! The mapper never fails on malformed documentation metadata — entries
//! missing their identifying field are skipped with guard clauses. Only
//! serialization and the write sink can return errors.

use crate::config::{DocumentationTemplate, ServiceConfig};
use crate::error::AppResult;
use crate::fileutils::{self, WriteSink};
use crate::refs::rewrite_model_refs;
use crate::version::SpecVersion;
use serde_json::{json, Map, Value};

mod paths;

/// Invocation options for a documentation-generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Artifact to write; the extension selects JSON vs YAML output.
    pub output_file_name: String,
    /// Export type selecting the target specification version.
    pub export_type: Option<String>,
}

/// Drives one generation run: version selection, document assembly,
/// serialization, write. Collaborators are passed in explicitly; the
/// generator holds no global state.
pub struct DocumentGenerator<'a> {
    options: GenerateOptions,
    sink: &'a mut dyn WriteSink,
}

impl<'a> DocumentGenerator<'a> {
    /// Creates a generator writing through the given sink.
    pub fn new(options: GenerateOptions, sink: &'a mut dyn WriteSink) -> Self {
        DocumentGenerator { options, sink }
    }

    /// Builds the document for `service` and writes it to the configured
    /// output file.
    pub fn run(&mut self, service: &ServiceConfig) -> AppResult<()> {
        let version = SpecVersion::from_export_type(self.options.export_type.as_deref());
        let document = build_document(version, service);
        let output = fileutils::render_document(&document, &self.options.output_file_name)?;
        self.sink.write(&self.options.output_file_name, &output)
    }
}

/// Assembles the full document tree for the given target version.
///
/// Field order mirrors the published layout: version marker, `info`,
/// `paths`, model/security placement, `tags`.
pub fn build_document(version: SpecVersion, service: &ServiceConfig) -> Value {
    let default_template = DocumentationTemplate::default();
    let template = service
        .custom
        .documentation
        .as_ref()
        .unwrap_or(&default_template);

    let mut document = Map::new();
    let version_field = if version.is_swagger() { "swagger" } else { "openapi" };
    document.insert(version_field.to_string(), json!(version.as_str()));
    document.insert("info".to_string(), build_info(template.api.as_ref()));
    document.insert("paths".to_string(), paths::build_paths(version, service));

    let models = build_models(template.models.as_ref());
    let schemes = template.security_schemes.as_ref().filter(|v| truthy(v));
    if version.is_swagger() {
        // Independent top-level fields in 2.0.
        if !models.is_empty() {
            document.insert("definitions".to_string(), Value::Object(models));
        }
        if let Some(schemes) = schemes {
            document.insert("securityDefinitions".to_string(), schemes.clone());
        }
    } else if !models.is_empty() || schemes.is_some() {
        // Merged under one components object in 3.0, schemas always present.
        let mut components = Map::new();
        components.insert("schemas".to_string(), Value::Object(models));
        components.insert(
            "securitySchemes".to_string(),
            schemes.cloned().unwrap_or_else(|| json!({})),
        );
        document.insert("components".to_string(), Value::Object(components));
    }

    if let Some(tags) = template
        .api
        .as_ref()
        .and_then(|api| api.get("tags"))
        .filter(|v| truthy(v))
    {
        document.insert("tags".to_string(), tags.clone());
    }

    Value::Object(document)
}

/// Copies the declared `api.info`, substituting defaults (`title: ""`,
/// `version: "1"`) for absent or falsy values. Other authored info
/// fields pass through verbatim.
fn build_info(api: Option<&Value>) -> Value {
    let mut info = api
        .and_then(|api| api.get("info"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    for (field, default) in [("title", ""), ("version", "1")] {
        if !info.get(field).map(truthy).unwrap_or(false) {
            info.insert(field.to_string(), json!(default));
        }
    }

    Value::Object(info)
}

/// Builds the named-model map. Entries missing a usable `name` or a
/// present `schema` are skipped; duplicate names overwrite (last wins).
/// Placeholder references are resolved on the way in.
fn build_models(models: Option<&Value>) -> Map<String, Value> {
    let mut out = Map::new();
    let Some(Value::Array(entries)) = models else {
        return out;
    };

    for entry in entries {
        let name = entry
            .get("name")
            .filter(|v| truthy(v))
            .and_then(Value::as_str);
        let schema = entry.get("schema").filter(|v| truthy(v));
        if let (Some(name), Some(schema)) = (name, schema) {
            out.insert(name.to_string(), rewrite_model_refs(schema));
        }
    }

    out
}

/// Presence rule used throughout the mapper: `null`, `false`, `0` and
/// `""` count as absent, everything else (including empty arrays and
/// objects) as present.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truthiness_rules() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("x")));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));
    }

    #[test]
    fn info_defaults_when_absent() {
        assert_eq!(build_info(None), json!({"title": "", "version": "1"}));
        assert_eq!(
            build_info(Some(&json!({}))),
            json!({"title": "", "version": "1"})
        );
    }

    #[test]
    fn info_defaults_replace_falsy_values_only() {
        let api = json!({"info": {"title": "", "version": "2.1", "description": "kept"}});
        assert_eq!(
            build_info(Some(&api)),
            json!({"title": "", "version": "2.1", "description": "kept"})
        );
    }

    #[test]
    fn models_skip_incomplete_entries_and_last_wins() {
        let models = json!([
            {},
            {"name": "OnlyName"},
            {"schema": {"type": "string"}},
            {"name": "Dup", "schema": {"type": "string"}},
            {"name": "Dup", "schema": {"type": "number"}},
            {"name": "Empty", "schema": {}}
        ]);
        let map = build_models(Some(&models));
        assert_eq!(map.len(), 2);
        assert_eq!(map["Dup"], json!({"type": "number"}));
        assert_eq!(map["Empty"], json!({}));
    }

    #[test]
    fn models_rewrite_placeholders_on_insertion() {
        let models = json!([
            {"name": "AnyModel", "schema": {"type": "array", "items": {"$ref": "{{model: AnyOtherModel}}"}}}
        ]);
        let map = build_models(Some(&models));
        assert_eq!(
            map["AnyModel"],
            json!({"type": "array", "items": {"$ref": "#/components/schemas/AnyOtherModel"}})
        );
    }
}
