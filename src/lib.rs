/*!
# Compilador Viewer

Interactive viewer for the artifacts of an external compilation service:
tokens, abstract syntax tree, nested symbol scopes, quadruple sequences,
optimization log and aggregate metrics. The service compiles; this crate
turns its loosely-typed output into uniform, renderable structures for a
person auditing the compiler's behavior.

## Core Components

- **Tree normalizer** ([`ast_view`]) - schema-less AST nodes into a
  uniform display tree with cumulative classification tags.
- **Scope tree controller** ([`scopes`]) - expand/collapse state and
  recursive count aggregation over the nested symbol-scope table.
- **Diagnostic parser** ([`diagnostics`]) - the fixed
  `"CATEGORÍA|LÍNEA|MENSAJE"` strings into severity-classified records.
- **Quadruple diff engine** ([`quadruples`]) - before/after reduction
  percentage, badge classification and display summaries.

Each component is a pure, synchronous transformation over data already in
memory. They are invoked independently per compile result and are cheap
enough to recompute on every render.

## Usage

### CLI

```bash
# Render one view of a saved compile result
compilador-viewer view --input result.json --tab ast
compilador-viewer view --input result.json --tab quadruples --format json

# One-screen digest, or error triage for CI
compilador-viewer summary --input result.json
compilador-viewer check --input result.json
```

### Library

```rust,no_run
use compilador_viewer::{load_compile_result, ast_view, scopes::ScopeTreeController};

let result = load_compile_result("result.json")?;
let tree = ast_view::normalize(result.ast.as_ref())?;

let mut controller = ScopeTreeController::new();
if let Some(table) = &result.symbol_table {
    controller.initialize(table);
}
# Ok::<(), anyhow::Error>(())
```
*/

pub mod ast_view;
pub mod core;
pub mod diagnostics;
pub mod model;
pub mod quadruples;
pub mod render;
pub mod scopes;

// Re-export main types for convenience
pub use ast_view::{normalize, Classification, DisplayNode, NodeKind, RawNode};
pub use self::core::{ArtifactError, MAX_TREE_DEPTH};
pub use diagnostics::{Diagnostic, Severity};
pub use model::{
    CompileMetrics, CompileRequest, CompileResponse, Quadruple, QuadrupleKind, ScopeTable, Symbol,
    SymbolType, Token, TokenType,
};
pub use quadruples::{
    ensure_reduction_metric, reduction_pct, OptimizationComparison, QuadrupleSummary,
    ReductionMetric,
};
pub use render::{JsonRenderer, OutputFormat, TextRenderer, ViewKind};
pub use scopes::{count_scopes, count_variables, ScopeArena, ScopeTreeController};

use anyhow::{Context, Result};
use std::path::Path;

/// Loads a compile result from disk and ensures the reduction metric.
///
/// The reduction is the one derived value the service may omit; it is
/// injected compute-if-absent so the metrics view can always show it.
pub fn load_compile_result<P: AsRef<Path>>(path: P) -> Result<CompileResponse> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("no se pudo leer {}", path.display()))?;
    let mut response = CompileResponse::from_json(&raw)?;
    let _ = quadruples::ensure_response_reduction(&mut response);
    tracing::debug!(
        "resultado cargado: {} tokens, {} cuádruplos, {} errores",
        response.tokens.len(),
        response.intermediate_code.len(),
        response.errors.len()
    );
    Ok(response)
}
