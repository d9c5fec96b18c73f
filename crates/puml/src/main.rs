//! puml CLI - `PlantUML` diagram renderer.
//!
//! Provides commands for:
//! - `render`: Render a diagram source file to an image via a `PlantUML` server
//! - `encode`: Print the URL token for a diagram source
//! - `decode`: Print the diagram source for a URL token
//!
//! Exit codes: 0 on success, 1 when the input file is missing, 2 when the
//! server request fails, 3 when the image cannot be written, 4 otherwise.

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DecodeArgs, EncodeArgs, RenderArgs};
use output::Output;

/// puml - Render `PlantUML` diagrams through a `PlantUML` server.
#[derive(Parser)]
#[command(name = "puml", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a diagram source file to an image.
    Render(RenderArgs),
    /// Encode diagram source into a URL token.
    Encode(EncodeArgs),
    /// Decode a URL token into diagram source.
    Decode(DecodeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Encode(args) => args.execute(),
        Commands::Decode(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(err.exit_code());
    }
}
