/*!
# Compile Service Boundary

Request and response shapes of the external compiler service. Field names
match the service exactly; every artifact tolerates absence so that a
failed compile still renders placeholder views instead of crashing any of
the viewers.
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

use super::metrics::CompileMetrics;
use super::quadruple::Quadruple;
use super::symbols::ScopeTable;
use super::token::Token;
use crate::ast_view::RawNode;

/// Request body: the source text to compile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileRequest {
    pub code: String,
}

/// Everything the service reports for one compile invocation.
///
/// One immutable artifact set per invocation; viewers derive display
/// structures from it on demand and never mutate it (the metrics record is
/// the single exception, via the compute-if-absent reduction contract).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub ast: Option<RawNode>,
    #[serde(default)]
    pub symbol_table: Option<ScopeTable>,
    #[serde(default)]
    pub intermediate_code: Vec<Quadruple>,
    #[serde(default)]
    pub optimized_code: Vec<Quadruple>,
    #[serde(default)]
    pub optimization_log: Vec<String>,
    /// Target-language source emitted by the backend.
    #[serde(default)]
    pub object_code: Option<String>,
    /// Cada entrada en el formato fijo `"CATEGORÍA|LÍNEA|MENSAJE"`.
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub metrics: Option<CompileMetrics>,
}

impl CompileResponse {
    /// Parses a compile result from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("respuesta de compilación inválida")
    }

    /// Parses a compile result from a reader (e.g. a saved result file).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("respuesta de compilación inválida")
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = CompileRequest {
            code: "function main() {}".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["code"], "function main() {}");
    }

    #[test]
    fn test_empty_object_is_a_valid_response() {
        let response = CompileResponse::from_json("{}").unwrap();
        assert!(!response.success);
        assert!(response.tokens.is_empty());
        assert!(response.ast.is_none());
        assert!(response.symbol_table.is_none());
        assert!(response.metrics.is_none());
        assert!(!response.has_errors());
    }

    #[test]
    fn test_invalid_json_reports_context() {
        let err = CompileResponse::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("respuesta de compilación inválida"));
    }

    #[test]
    fn test_wire_field_names() {
        let raw = r#"{
            "success": true,
            "tokens": [{"type": "KEYWORD", "value": "function", "line": 1, "column": 1}],
            "symbol_table": {"scope_name": "global", "symbols": {}, "children": []},
            "intermediate_code": [],
            "optimized_code": [],
            "optimization_log": ["Plegado de constantes: 3 + 4 -> 7"],
            "object_code": "print('hola')",
            "errors": ["Semántico|4|Variable no declarada: x"],
            "warnings": [],
            "metrics": {"tokens_count": 1}
        }"#;
        let response = CompileResponse::from_json(raw).unwrap();
        assert!(response.success);
        assert_eq!(response.tokens.len(), 1);
        assert_eq!(response.optimization_log.len(), 1);
        assert_eq!(response.object_code.as_deref(), Some("print('hola')"));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.metrics.unwrap().tokens_count, 1);
    }
}
