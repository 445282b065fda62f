//! # Published-Documentation Retrieval
//!
//! Downloads the documentation already published for a deployed API
//! stage. The REST API id is recovered from the deployment stack's
//! outputs (the `AwsDocApiId` output key), then an export request is
//! issued against the API management service and its body written
//! verbatim to the output file. Single-shot calls, no retry: a provider
//! failure rejects the whole operation.

use crate::error::{AppError, AppResult};
use crate::fileutils::{self, WriteSink};
use serde_json::{json, Value};

/// Output key under which the deployment publishes its REST API id.
const REST_API_ID_OUTPUT_KEY: &str = "AwsDocApiId";

/// Export extensions requested unless overridden by the caller.
const DEFAULT_EXTENSIONS: &str = "integrations";

/// Abstraction over the cloud provider's request dispatch, as exposed by
/// the deployment framework. Implementations decide transport, signing
/// and region handling.
pub trait ProviderRequest {
    /// Issues one request against `service`/`action` with the given
    /// parameters and returns the raw response tree.
    fn request(&self, service: &str, action: &str, params: &Value) -> AppResult<Value>;

    /// Deployment stage the documentation was published for.
    fn stage(&self) -> String;

    /// Name of the deployment stack carrying the `AwsDocApiId` output.
    fn stack_name(&self) -> String;
}

/// Invocation options for a download run.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Artifact to write; a yaml-like extension requests a YAML export.
    pub output_file_name: String,
    /// Export extensions override (defaults to `integrations`).
    pub extensions: Option<String>,
}

/// Downloads the published documentation and writes it to the output
/// file. The export body is written verbatim, no re-serialization.
pub fn download_documentation(
    provider: &dyn ProviderRequest,
    options: &DownloadOptions,
    sink: &mut dyn WriteSink,
) -> AppResult<()> {
    let rest_api_id = resolve_rest_api_id(provider)?;

    let extension = fileutils::file_extension(&options.output_file_name);
    let accepts = if fileutils::is_yaml_extension(extension) {
        "application/yaml"
    } else {
        "application/json"
    };
    let extensions = options.extensions.as_deref().unwrap_or(DEFAULT_EXTENSIONS);

    let response = provider.request(
        "APIGateway",
        "getExport",
        &json!({
            "stageName": provider.stage(),
            "restApiId": rest_api_id,
            "exportType": "swagger",
            "parameters": {
                "extensions": extensions,
            },
            "accepts": accepts,
        }),
    )?;

    let body = match response.get("body") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => return Err(AppError::Provider("export response carries no body".into())),
    };

    sink.write(&options.output_file_name, &body)
}

/// Resolves the deployed REST API id from the stack's outputs.
pub fn resolve_rest_api_id(provider: &dyn ProviderRequest) -> AppResult<String> {
    let stack_name = provider.stack_name();
    let response = provider.request(
        "CloudFormation",
        "describeStacks",
        &json!({"StackName": stack_name}),
    )?;

    let outputs = response
        .pointer("/Stacks/0/Outputs")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::Provider(format!("stack {} reported no outputs", stack_name))
        })?;

    outputs
        .iter()
        .find(|output| {
            output.get("OutputKey").and_then(Value::as_str) == Some(REST_API_ID_OUTPUT_KEY)
        })
        .and_then(|output| output.get("OutputValue").and_then(Value::as_str))
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::Provider(format!(
                "stack {} has no {} output",
                stack_name, REST_API_ID_OUTPUT_KEY
            ))
        })
}
