#![deny(missing_docs)]

//! # sls-apidoc CLI
//!
//! Command line front end for the documentation exporter.
//!
//! Supported commands:
//! - `generate`: builds an OpenAPI/Swagger document from a service
//!   configuration file and writes it to the output artifact.
//!
//! Downloading published documentation is a library-only operation since
//! it needs an injected cloud provider implementation.

use clap::{Parser, Subcommand};
use sls_apidoc::{
    AppError, AppResult, DocumentGenerator, FsSink, GenerateOptions, ServiceConfig,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Serverless API documentation exporter")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an OpenAPI/Swagger document from a service configuration.
    Generate(GenerateArgs),
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
struct GenerateArgs {
    /// Service configuration file (YAML or JSON, selected by extension).
    #[clap(long, default_value = "serverless.yml")]
    config: PathBuf,

    /// Output artifact; its extension selects YAML vs JSON serialization.
    #[clap(long, default_value = "openapi.json")]
    output_file_name: String,

    /// Export type: `oas30`/`openapi30` target OpenAPI 3.0.1, anything
    /// else targets Swagger 2.0.
    #[clap(long)]
    export_type: Option<String>,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate(args),
    }
}

fn generate(args: &GenerateArgs) -> AppResult<()> {
    let raw = fs::read_to_string(&args.config)?;
    let extension = args
        .config
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let service: ServiceConfig = if sls_apidoc::fileutils::is_yaml_extension(extension) {
        serde_yaml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", args.config.display(), e)))?
    } else {
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", args.config.display(), e)))?
    };

    let options = GenerateOptions {
        output_file_name: args.output_file_name.clone(),
        export_type: args.export_type.clone(),
    };
    let mut sink = FsSink;
    DocumentGenerator::new(options, &mut sink).run(&service)
}
