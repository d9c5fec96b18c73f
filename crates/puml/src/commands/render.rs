//! `puml render` command implementation.

use std::path::PathBuf;

use clap::Args;
use puml_config::{CliSettings, Config};
use puml_render::{HttpTransport, OutputFormat, Pipeline, Renderer};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Diagram source file (default: diagrams/architecture.puml).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Rendered image path (default: input path with the format's extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendering server URL (overrides config).
    #[arg(long, env = "PLANTUML_SERVER_URL")]
    server_url: Option<String>,

    /// Output format: png, svg or txt (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Request timeout in seconds (default: HTTP client default).
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to configuration file (default: auto-discover puml.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            input: self.input,
            output: self.output,
            server_url: self.server_url,
            format: self.format,
            timeout_secs: self.timeout,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let pipeline = Pipeline::new(
            config.diagram_resolved.input.clone(),
            config.diagram_resolved.output_path(),
        );
        let renderer = Renderer::new(HttpTransport::new(config.server.timeout()))
            .with_server_url(config.server.url.clone())
            .with_format(config.diagram_resolved.format);

        output.info(&format!("Source: {}", pipeline.input().display()));

        let summary = pipeline.run(&renderer)?;

        output.info(&format!("Requested: {}", summary.url));
        output.success(&format!(
            "Wrote {} ({} bytes)",
            summary.output.display(),
            summary.bytes_written
        ));
        Ok(())
    }
}
