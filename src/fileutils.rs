//! # Output Handling
//!
//! File-extension detection, document serialization and the write sink
//! abstraction. The output format follows the artifact's extension:
//! `yml`/`yaml` serialize to YAML, anything else to pretty-printed JSON,
//! both with 2-space indentation.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Returns the final extension of a filename, without the dot.
/// `"doc.export.yml"` -> `"yml"`; no extension -> `""`.
pub fn file_extension(filename: &str) -> &str {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("")
}

/// True for the YAML-like extensions.
pub fn is_yaml_extension(extension: &str) -> bool {
    matches!(extension, "yml" | "yaml")
}

/// Serializes a document according to the output filename's extension.
pub fn render_document(document: &Value, output_file_name: &str) -> AppResult<String> {
    if is_yaml_extension(file_extension(output_file_name)) {
        serde_yaml::to_string(document)
            .map_err(|e| AppError::General(format!("YAML serialization failed: {}", e)))
    } else {
        serde_json::to_string_pretty(document)
            .map_err(|e| AppError::General(format!("JSON serialization failed: {}", e)))
    }
}

/// Destination for the rendered artifact. A single full write per
/// invocation; failures propagate to the caller untouched.
pub trait WriteSink {
    /// Writes `contents` to `path`, replacing any previous contents.
    fn write(&mut self, path: &str, contents: &str) -> AppResult<()>;
}

/// Filesystem-backed sink. Does not create parent directories.
#[derive(Debug, Default)]
pub struct FsSink;

impl WriteSink for FsSink {
    fn write(&mut self, path: &str, contents: &str) -> AppResult<()> {
        fs::write(path, contents).map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_the_last_extension() {
        assert_eq!(file_extension("openapi.json"), "json");
        assert_eq!(file_extension("doc.export.yml"), "yml");
        assert_eq!(file_extension("no_extension"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn yaml_extensions() {
        assert!(is_yaml_extension("yml"));
        assert!(is_yaml_extension("yaml"));
        assert!(!is_yaml_extension("json"));
        assert!(!is_yaml_extension(""));
    }

    #[test]
    fn renders_json_with_two_space_indent() {
        let rendered = render_document(&json!({"info": {"title": ""}}), "doc.json").unwrap();
        assert_eq!(rendered, "{\n  \"info\": {\n    \"title\": \"\"\n  }\n}");
    }

    #[test]
    fn renders_yaml_for_yaml_extensions() {
        let rendered = render_document(&json!({"swagger": "2.0"}), "doc.yml").unwrap();
        assert_eq!(rendered, "swagger: '2.0'\n");
    }

    #[test]
    fn fs_sink_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut sink = FsSink;
        sink.write(path.to_str().unwrap(), "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn fs_sink_failure_propagates() {
        let mut sink = FsSink;
        let result = sink.write("/nonexistent-dir/out.json", "{}");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
