/*!
# Compilador Viewer CLI

Command-line interface over saved compile results: render one artifact
view, print a digest, or triage the error list for CI.
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compilador_viewer::render::{self, OutputFormat, TextRenderer, ViewKind};
use compilador_viewer::{load_compile_result, JsonRenderer};
use console::Term;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "compilador-viewer",
    version = env!("CARGO_PKG_VERSION"),
    author = "Compilador Interactivo Team",
    about = "Interactive viewer for compiler artifacts: AST, scopes, quadruples, metrics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one artifact view from a compile result
    View {
        /// Path to the compile-result JSON produced by the service
        #[arg(short, long)]
        input: PathBuf,

        /// View to render (tokens, ast, symbols, quadruples, optimization, object-code, metrics)
        #[arg(short, long, default_value = "metrics")]
        tab: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// One-screen digest of the whole compile result
    Summary {
        /// Path to the compile-result JSON produced by the service
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Parse and classify the diagnostic list; exits 1 when errors exist
    Check {
        /// Path to the compile-result JSON produced by the service
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::View {
            input,
            tab,
            format,
            output,
        } => cmd_view(&input, &tab, &format, output.as_deref()),
        Commands::Summary { input } => cmd_summary(&input),
        Commands::Check { input, format } => cmd_check(&input, &format),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_view(
    input: &std::path::Path,
    tab: &str,
    format: &str,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let view: ViewKind = tab.parse()?;
    let format: OutputFormat = format.parse()?;
    let response = load_compile_result(input)?;
    info!("vista {} de {}", view, input.display());

    // Los archivos siempre sin colores; la terminal decide por sí misma.
    let use_colors = output.is_none() && Term::stdout().features().colors_supported();
    let rendered = render::render_view(&response, view, format, use_colors)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("no se pudo escribir {}", path.display()))?;
            info!("reporte escrito en {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn cmd_summary(input: &std::path::Path) -> Result<()> {
    let response = load_compile_result(input)?;
    let use_colors = Term::stdout().features().colors_supported();
    let renderer = if use_colors {
        TextRenderer::new()
    } else {
        TextRenderer::plain()
    };
    print!("{}", renderer.render_summary(&response));
    Ok(())
}

fn cmd_check(input: &std::path::Path, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let response = load_compile_result(input)?;

    match format {
        OutputFormat::Text => {
            if response.errors.is_empty() {
                println!("Sin errores de compilación.");
            } else {
                let use_colors = Term::stdout().features().colors_supported();
                let renderer = if use_colors {
                    TextRenderer::new()
                } else {
                    TextRenderer::plain()
                };
                print!("{}", renderer.render_errors(&response.errors));
            }
        }
        OutputFormat::Json => {
            println!("{}", JsonRenderer::new().render_errors(&response.errors)?);
        }
    }

    if response.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
