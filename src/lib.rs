#![deny(missing_docs)]

//! # sls-apidoc
//!
//! Exports an OpenAPI 2.0 (Swagger) or OpenAPI 3.0.1 document from the
//! documentation metadata embedded in a Serverless-style service
//! configuration, and downloads previously published documentation from
//! an API Gateway stage.
//!
//! The mapper is permissive by design: malformed documentation entries
//! (missing names, missing status codes) are skipped silently and never
//! abort document generation. Only the external collaborators — the
//! cloud provider request and the output write sink — can fail.

/// Shared error types.
pub mod error;

/// Service configuration tree.
pub mod config;

/// Target specification version selection.
pub mod version;

/// Document assembly.
pub mod generator;

/// `{{model: Name}}` placeholder rewriting.
pub mod refs;

/// Output-file naming, serialization and the write sink.
pub mod fileutils;

/// Published-documentation retrieval from the cloud provider.
pub mod download;

pub use config::{DocumentationTemplate, Event, FunctionConfig, ServiceConfig};
pub use download::{download_documentation, resolve_rest_api_id, DownloadOptions, ProviderRequest};
pub use error::{AppError, AppResult};
pub use fileutils::{FsSink, WriteSink};
pub use generator::{build_document, DocumentGenerator, GenerateOptions};
pub use refs::rewrite_model_refs;
pub use version::SpecVersion;
