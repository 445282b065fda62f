//! # Specification Version Selection
//!
//! Maps the caller-supplied export type onto the target OpenAPI version.

/// The target API-description specification version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    /// OpenAPI 2.0 (Swagger).
    Swagger2,
    /// OpenAPI 3.0.1.
    OpenApi301,
}

impl SpecVersion {
    /// Resolves an export type to a version.
    ///
    /// Total over all inputs: `oas30` and `openapi30` (case-sensitive)
    /// select 3.0.1, everything else — absent, empty or unrecognized —
    /// falls back to 2.0.
    pub fn from_export_type(export_type: Option<&str>) -> Self {
        match export_type {
            Some("oas30") | Some("openapi30") => SpecVersion::OpenApi301,
            _ => SpecVersion::Swagger2,
        }
    }

    /// The version string emitted in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::Swagger2 => "2.0",
            SpecVersion::OpenApi301 => "3.0.1",
        }
    }

    /// True for the 2.0 target, where parameter schemas are flattened and
    /// request bodies live in the `parameters` array.
    pub fn is_swagger(&self) -> bool {
        matches!(self, SpecVersion::Swagger2)
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
