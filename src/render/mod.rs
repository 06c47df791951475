/*!
# Render Module

Presentational composition over the display structures: one renderer per
output format, dispatched by view (the tabs of the original interface).
The renderers consume already-built display models and never mutate the
compile result.

## Formats

- **Text** - styled console output, colors optional.
- **JSON** - structured output for tooling and the debug panel.
*/

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::CompileResponse;

/// The artifact views a compile result can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    Tokens,
    Ast,
    Symbols,
    Quadruples,
    Optimization,
    ObjectCode,
    Metrics,
}

impl FromStr for ViewKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tokens" => Ok(ViewKind::Tokens),
            "ast" => Ok(ViewKind::Ast),
            "symbols" | "simbolos" => Ok(ViewKind::Symbols),
            "quadruples" | "cuadruplos" => Ok(ViewKind::Quadruples),
            "optimization" | "optimizacion" => Ok(ViewKind::Optimization),
            "object-code" | "objectcode" | "object_code" => Ok(ViewKind::ObjectCode),
            "metrics" | "metricas" => Ok(ViewKind::Metrics),
            _ => Err(anyhow::anyhow!("Vista desconocida: {}", s)),
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewKind::Tokens => "tokens",
            ViewKind::Ast => "ast",
            ViewKind::Symbols => "symbols",
            ViewKind::Quadruples => "quadruples",
            ViewKind::Optimization => "optimization",
            ViewKind::ObjectCode => "object-code",
            ViewKind::Metrics => "metrics",
        };
        write!(f, "{}", name)
    }
}

/// Output format of a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Formato de salida desconocido: {}", s)),
        }
    }
}

/// Renders one view of a compile result in the requested format.
pub fn render_view(
    response: &CompileResponse,
    view: ViewKind,
    format: OutputFormat,
    use_colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let renderer = if use_colors {
                TextRenderer::new()
            } else {
                TextRenderer::plain()
            };
            Ok(renderer.render(view, response))
        }
        OutputFormat::Json => JsonRenderer::new().render(view, response),
    }
}
