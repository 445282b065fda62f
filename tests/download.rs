use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sls_apidoc::{
    download_documentation, resolve_rest_api_id, AppError, AppResult, DownloadOptions,
    ProviderRequest, WriteSink,
};
use std::cell::RefCell;

struct MockProvider {
    calls: RefCell<Vec<(String, String, Value)>>,
    stacks_response: Value,
    export_response: AppResult<Value>,
}

impl MockProvider {
    fn new() -> Self {
        MockProvider {
            calls: RefCell::new(Vec::new()),
            stacks_response: json!({
                "Stacks": [{
                    "Outputs": [
                        {"OutputKey": "some-key-1", "OutputValue": "some-value-1"},
                        {"OutputKey": "AwsDocApiId", "OutputValue": "abc123"},
                        {"OutputKey": "some-key-2", "OutputValue": "some-value-2"}
                    ]
                }]
            }),
            export_response: Ok(json!({"body": "some body"})),
        }
    }

    fn call(&self, index: usize) -> (String, String, Value) {
        self.calls.borrow()[index].clone()
    }
}

impl ProviderRequest for MockProvider {
    fn request(&self, service: &str, action: &str, params: &Value) -> AppResult<Value> {
        self.calls
            .borrow_mut()
            .push((service.to_string(), action.to_string(), params.clone()));
        match (service, action) {
            ("CloudFormation", "describeStacks") => Ok(self.stacks_response.clone()),
            ("APIGateway", "getExport") => match &self.export_response {
                Ok(value) => Ok(value.clone()),
                Err(_) => Err(AppError::Provider("export failed".into())),
            },
            _ => Err(AppError::Provider(format!(
                "unexpected call {}.{}",
                service, action
            ))),
        }
    }

    fn stage(&self) -> String {
        "testStage".to_string()
    }

    fn stack_name(&self) -> String {
        "testStackName".to_string()
    }
}

#[derive(Default)]
struct MemorySink {
    writes: Vec<(String, String)>,
}

impl WriteSink for MemorySink {
    fn write(&mut self, path: &str, contents: &str) -> AppResult<()> {
        self.writes.push((path.to_string(), contents.to_string()));
        Ok(())
    }
}

#[test]
fn resolves_the_rest_api_id_among_other_outputs() {
    let provider = MockProvider::new();
    let rest_api_id = resolve_rest_api_id(&provider).unwrap();
    assert_eq!(rest_api_id, "abc123");
    assert_eq!(
        provider.call(0),
        (
            "CloudFormation".to_string(),
            "describeStacks".to_string(),
            json!({"StackName": "testStackName"})
        )
    );
}

#[test]
fn missing_rest_api_output_is_a_provider_error() {
    let mut provider = MockProvider::new();
    provider.stacks_response = json!({"Stacks": [{"Outputs": []}]});
    let error = resolve_rest_api_id(&provider).unwrap_err();
    assert!(matches!(error, AppError::Provider(_)));
    assert!(error.to_string().contains("AwsDocApiId"));
}

#[test]
fn downloads_with_json_accepts_for_unknown_extensions() {
    let provider = MockProvider::new();
    let mut sink = MemorySink::default();
    let options = DownloadOptions {
        output_file_name: "test.txt".to_string(),
        extensions: None,
    };
    download_documentation(&provider, &options, &mut sink).unwrap();

    assert_eq!(
        provider.call(1),
        (
            "APIGateway".to_string(),
            "getExport".to_string(),
            json!({
                "stageName": "testStage",
                "restApiId": "abc123",
                "exportType": "swagger",
                "parameters": {"extensions": "integrations"},
                "accepts": "application/json"
            })
        )
    );
    assert_eq!(
        sink.writes,
        vec![("test.txt".to_string(), "some body".to_string())]
    );
}

#[test]
fn downloads_with_yaml_accepts_for_yaml_extensions() {
    let provider = MockProvider::new();
    let mut sink = MemorySink::default();
    let options = DownloadOptions {
        output_file_name: "test.yml".to_string(),
        extensions: None,
    };
    download_documentation(&provider, &options, &mut sink).unwrap();

    let (_, _, params) = provider.call(1);
    assert_eq!(params["accepts"], json!("application/yaml"));
    assert_eq!(
        sink.writes,
        vec![("test.yml".to_string(), "some body".to_string())]
    );
}

#[test]
fn extensions_option_overrides_the_default() {
    let provider = MockProvider::new();
    let mut sink = MemorySink::default();
    let options = DownloadOptions {
        output_file_name: "test.yml".to_string(),
        extensions: Some("apigateway".to_string()),
    };
    download_documentation(&provider, &options, &mut sink).unwrap();

    let (_, _, params) = provider.call(1);
    assert_eq!(params["parameters"], json!({"extensions": "apigateway"}));
}

#[test]
fn export_failure_propagates_and_nothing_is_written() {
    let mut provider = MockProvider::new();
    provider.export_response = Err(AppError::Provider("export failed".into()));
    let mut sink = MemorySink::default();
    let options = DownloadOptions {
        output_file_name: "test.json".to_string(),
        extensions: None,
    };
    let error = download_documentation(&provider, &options, &mut sink).unwrap_err();
    assert!(matches!(error, AppError::Provider(_)));
    assert!(sink.writes.is_empty());
}

#[test]
fn a_bodyless_export_response_is_a_provider_error() {
    let mut provider = MockProvider::new();
    provider.export_response = Ok(json!({"status": 200}));
    let mut sink = MemorySink::default();
    let options = DownloadOptions {
        output_file_name: "test.json".to_string(),
        extensions: None,
    };
    let error = download_documentation(&provider, &options, &mut sink).unwrap_err();
    assert!(error.to_string().contains("body"));
    assert!(sink.writes.is_empty());
}
