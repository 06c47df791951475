/*!
# JSON Renderer

Structured output of each view for tooling and the debug panel: the same
display structures the text renderer consumes, serialized verbatim.
*/

use anyhow::Result;
use serde_json::{json, Value};

use super::ViewKind;
use crate::ast_view;
use crate::diagnostics;
use crate::model::CompileResponse;
use crate::quadruples::{OptimizationComparison, QuadrupleSummary};
use crate::scopes::{count_scopes, count_variables, ScopeArena};

/// Machine-readable renderer for the artifact views.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        JsonRenderer
    }

    pub fn render(&self, view: ViewKind, response: &CompileResponse) -> Result<String> {
        let value = match view {
            ViewKind::Tokens => self.tokens_value(response),
            ViewKind::Ast => self.ast_value(response),
            ViewKind::Symbols => self.symbols_value(response),
            ViewKind::Quadruples => self.quadruples_value(response)?,
            ViewKind::Optimization => self.optimization_value(response)?,
            ViewKind::ObjectCode => json!({ "object_code": response.object_code }),
            ViewKind::Metrics => serde_json::to_value(&response.metrics)?,
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Structured error list, with parsed categories and severities.
    pub fn render_errors(&self, errors: &[String]) -> Result<String> {
        let parsed: Vec<Value> = diagnostics::parse_all(errors)
            .into_iter()
            .map(|diagnostic| {
                json!({
                    "category": diagnostic.category,
                    "line": diagnostic.line,
                    "message": diagnostic.message,
                    "severity": diagnostic.severity(),
                    "color_class": diagnostic.severity().color_class(),
                })
            })
            .collect();
        Ok(serde_json::to_string_pretty(&parsed)?)
    }

    fn tokens_value(&self, response: &CompileResponse) -> Value {
        let tokens: Vec<Value> = response
            .tokens
            .iter()
            .map(|token| {
                json!({
                    "type": token.token_type.wire_name(),
                    "label": token.token_type.display_label(),
                    "value": token.value,
                    "line": token.line,
                    "column": token.column,
                    "color": token.token_type.color_hex(),
                })
            })
            .collect();
        json!({ "total": tokens.len(), "tokens": tokens })
    }

    fn ast_value(&self, response: &CompileResponse) -> Value {
        match ast_view::normalize(response.ast.as_ref()) {
            Ok(None) => json!({ "tree": null }),
            Ok(Some(tree)) => json!({
                "node_count": tree.node_count(),
                "tree": tree,
            }),
            Err(err) => json!({ "tree": null, "error": err.to_string() }),
        }
    }

    fn symbols_value(&self, response: &CompileResponse) -> Value {
        match &response.symbol_table {
            None => json!({ "table": null }),
            Some(table) => {
                let arena = ScopeArena::build(table);
                json!({
                    "scopes_total": count_scopes(table),
                    "variables_total": count_variables(table),
                    "scopes": arena.iter().collect::<Vec<_>>(),
                    "table": table,
                })
            }
        }
    }

    fn quadruples_value(&self, response: &CompileResponse) -> Result<Value> {
        let rows: Vec<Value> = response
            .intermediate_code
            .iter()
            .map(|quad| {
                json!({
                    "index": quad.index,
                    "operator": quad.operator,
                    "arg1": quad.arg1,
                    "arg2": quad.arg2,
                    "result": quad.result,
                    "type": quad.quadruple_type.wire_name(),
                    "badge": crate::quadruples::classify(quad),
                })
            })
            .collect();
        Ok(json!({
            "summary": serde_json::to_value(QuadrupleSummary::of(&response.intermediate_code))?,
            "quadruples": rows,
        }))
    }

    fn optimization_value(&self, response: &CompileResponse) -> Result<Value> {
        let comparison =
            OptimizationComparison::new(&response.intermediate_code, &response.optimized_code);
        Ok(json!({
            "comparison": serde_json::to_value(comparison)?,
            "log": response.optimization_log,
            "original": response.intermediate_code,
            "optimized": response.optimized_code,
        }))
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}
