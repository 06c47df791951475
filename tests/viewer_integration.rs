/*!
# Integration Tests for Compilador Viewer

Exercises the full path from a captured service response to the rendered
views: wire compatibility, normalization, scope state, diagnostics and
the optimization metrics contract.
*/

use compilador_viewer::render::{render_view, OutputFormat, ViewKind};
use compilador_viewer::{
    ast_view, count_scopes, count_variables, diagnostics, load_compile_result, quadruples,
    CompileResponse, ReductionMetric, ScopeArena, ScopeTreeController, Severity, TokenType,
};
use std::fs;
use tempfile::TempDir;

/// Respuesta del servicio capturada para un programa pequeño con un if.
const FIXTURE: &str = r#"{
    "success": false,
    "tokens": [
        {"type": "KEYWORD", "value": "function", "line": 1, "column": 1},
        {"type": "IDENTIFIER", "value": "main", "line": 1, "column": 10},
        {"type": "DELIMITER", "value": "(", "line": 1, "column": 14},
        {"type": "DELIMITER", "value": ")", "line": 1, "column": 15},
        {"type": "KEYWORD", "value": "int", "line": 2, "column": 5},
        {"type": "IDENTIFIER", "value": "contador", "line": 2, "column": 9},
        {"type": "OPERATOR", "value": "=", "line": 2, "column": 18},
        {"type": "INTEGER", "value": "0", "line": 2, "column": 20},
        {"type": "FLOAT", "value": "3.1416", "line": 3, "column": 16},
        {"type": "STRING", "value": "Inicio del programa", "line": 4, "column": 11}
    ],
    "ast": {
        "type": "Program",
        "body": [
            {
                "type": "Function",
                "name": "main",
                "value": "main",
                "loc": {"type": "SourceSpan", "line": 1},
                "body": {
                    "type": "Block",
                    "statements": [
                        {"type": "VarDecl", "name": "contador", "value": "contador",
                         "init": {"type": "Literal", "value": 0}},
                        {"type": "If",
                         "condition": {"type": "BinaryExpression", "operator": "<",
                                       "left": {"type": "Identifier", "value": "contador"},
                                       "right": {"type": "Literal", "value": 5}},
                         "then_branch": {"type": "Block", "statements": [
                             {"type": "Print",
                              "argument": {"type": "String", "value": "Inicio del programa"}}
                         ]}}
                    ]
                }
            }
        ]
    },
    "symbol_table": {
        "scope_name": "global",
        "level": 0,
        "symbols": {
            "main": {"name": "main", "symbol_type": "function", "data_type": "void",
                     "scope": "global", "line": 1, "initialized": true, "used": true}
        },
        "children": [
            {
                "scope_name": "main",
                "level": 1,
                "symbols": {
                    "contador": {"name": "contador", "symbol_type": "variable",
                                 "data_type": "int", "scope": "main", "line": 2,
                                 "initialized": true, "used": true, "memory_address": 1000},
                    "pi": {"name": "pi", "symbol_type": "variable", "data_type": "float",
                           "scope": "main", "line": 3, "initialized": true, "used": false,
                           "memory_address": 1004}
                },
                "children": [
                    {"scope_name": "if_block", "level": 2, "symbols": {}, "children": []}
                ]
            }
        ]
    },
    "intermediate_code": [
        {"index": 0, "operator": "=", "arg1": "0", "result": "contador",
         "quadruple_type": "assignment"},
        {"index": 1, "operator": "<", "arg1": "contador", "arg2": "5", "result": "t1",
         "quadruple_type": "comparison"},
        {"index": 2, "operator": "JMPF", "arg1": "t1", "result": "label_1",
         "quadruple_type": "jump"},
        {"index": 3, "operator": "PRINT", "arg1": "Inicio del programa",
         "quadruple_type": "write"},
        {"index": 4, "operator": "LABEL", "result": "label_1", "quadruple_type": "label"},
        {"index": 5, "operator": "+", "arg1": "contador", "arg2": "1", "result": "t2",
         "quadruple_type": "arithmetic"}
    ],
    "optimized_code": [
        {"index": 0, "operator": "=", "arg1": "0", "result": "contador",
         "quadruple_type": "assignment"},
        {"index": 1, "operator": "PRINT", "arg1": "Inicio del programa",
         "quadruple_type": "write"},
        {"index": 2, "operator": "+", "arg1": "contador", "arg2": "1", "result": "t2",
         "quadruple_type": "arithmetic"}
    ],
    "optimization_log": [
        "Propagación de constantes: contador = 0",
        "Eliminación de salto redundante: label_1"
    ],
    "object_code": "contador = 0\nprint('Inicio del programa')\ncontador = contador + 1\n",
    "errors": [
        "Semántico|3|Variable no usada: pi",
        "Léxico|0|Fin de archivo inesperado"
    ],
    "warnings": ["Advertencia: variable pi declarada pero no usada"],
    "metrics": {
        "compilation_time": 18.4271,
        "tokens_count": 10,
        "ast_nodes_count": 11,
        "symbols_count": 3,
        "quadruples_count": 6,
        "temporals_count": 2,
        "errors_count": 2,
        "warnings_count": 1
    }
}"#;

fn fixture() -> CompileResponse {
    CompileResponse::from_json(FIXTURE).unwrap()
}

#[test]
fn test_fixture_wire_compatibility() {
    let response = fixture();
    assert!(!response.success);
    assert_eq!(response.tokens.len(), 10);
    assert_eq!(response.tokens[0].token_type, TokenType::Keyword);
    assert_eq!(response.intermediate_code.len(), 6);
    assert_eq!(response.optimized_code.len(), 3);
    assert_eq!(response.warnings.len(), 1);
    assert!(response.object_code.is_some());
}

#[test]
fn test_normalized_tree_shape() {
    let response = fixture();
    let tree = ast_view::normalize(response.ast.as_ref()).unwrap().unwrap();

    assert_eq!(tree.label, "Program");
    assert_eq!(tree.children.len(), 1);

    let function = &tree.children[0];
    assert_eq!(function.label, "Function");
    assert_eq!(function.display_value, "main");
    // `loc` nunca es hijo, aunque traiga discriminante.
    assert_eq!(function.children.len(), 1);

    let block = &function.children[0];
    let labels: Vec<&str> = block.children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["VarDecl", "If"]);

    let condition = &block.children[1].children[0];
    assert_eq!(condition.label, "BinaryExpression");
    assert_eq!(condition.display_value, "<");
}

#[test]
fn test_scope_controller_lifecycle_over_fixture() {
    let response = fixture();
    let table = response.symbol_table.as_ref().unwrap();

    assert_eq!(count_scopes(table), 3);
    assert_eq!(count_variables(table), 2);

    let mut controller = ScopeTreeController::new();
    controller.initialize(table);
    assert!(controller.is_expanded("global"));
    assert!(controller.is_expanded("main"));
    assert!(!controller.is_expanded("if_block"));

    controller.expand_all(table);
    assert!(controller.is_expanded("if_block"));

    controller.collapse_all();
    assert!(controller.is_expanded("global"));
    assert!(!controller.is_expanded("main"));

    let arena = ScopeArena::build(table);
    assert_eq!(arena.len(), 3);
    let keys: Vec<&str> = arena.iter().map(|s| s.path_key.as_str()).collect();
    assert_eq!(keys, vec!["global", "global/main#0", "global/main#0/if_block#0"]);
}

#[test]
fn test_diagnostics_from_fixture() {
    let response = fixture();
    let parsed = diagnostics::parse_all(&response.errors);
    assert_eq!(parsed.len(), 2);

    assert_eq!(parsed[0].severity(), Severity::Semantic);
    assert_eq!(parsed[0].line, "3");
    assert!(parsed[0].has_line());

    assert_eq!(parsed[1].severity(), Severity::Lexical);
    // Línea "0": la insignia se suprime.
    assert!(!parsed[1].has_line());
}

#[test]
fn test_reduction_metric_contract_over_fixture() {
    let mut response = fixture();
    assert!(response.metrics.as_ref().unwrap().optimization_reduction.is_none());

    let first = quadruples::ensure_response_reduction(&mut response).unwrap();
    assert_eq!(first, ReductionMetric::Derived(50.0));

    // Segunda aplicación: mismo valor, nunca se recalcula encima.
    let second = quadruples::ensure_response_reduction(&mut response).unwrap();
    assert_eq!(second.value(), 50.0);
    assert_eq!(
        response.metrics.as_ref().unwrap().optimization_reduction,
        Some(50.0)
    );
}

#[test]
fn test_all_views_render_from_fixture() {
    let mut response = fixture();
    let _ = quadruples::ensure_response_reduction(&mut response);

    for view in [
        ViewKind::Tokens,
        ViewKind::Ast,
        ViewKind::Symbols,
        ViewKind::Quadruples,
        ViewKind::Optimization,
        ViewKind::ObjectCode,
        ViewKind::Metrics,
    ] {
        let text = render_view(&response, view, OutputFormat::Text, false).unwrap();
        assert!(!text.is_empty());
        let json = render_view(&response, view, OutputFormat::Json, false).unwrap();
        serde_json::from_str::<serde_json::Value>(&json).unwrap();
    }

    let quadruples_view =
        render_view(&response, ViewKind::Quadruples, OutputFormat::Text, false).unwrap();
    assert!(quadruples_view.contains("Total: 6 cuádruplos | Temporales: 2 | Etiquetas: 1"));

    let optimization_view =
        render_view(&response, ViewKind::Optimization, OutputFormat::Text, false).unwrap();
    assert!(optimization_view.contains("Reducción: 50.0%"));
}

#[test]
fn test_load_compile_result_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("result.json");
    fs::write(&path, FIXTURE).unwrap();

    let response = load_compile_result(&path).unwrap();
    // La carga inyecta la reducción ausente (cómputo si falta).
    assert_eq!(
        response.metrics.as_ref().unwrap().optimization_reduction,
        Some(50.0)
    );

    let missing = load_compile_result(temp_dir.path().join("no-existe.json"));
    assert!(missing.is_err());
}

#[test]
fn test_partial_response_degrades_to_placeholders() {
    let response = CompileResponse::from_json(r#"{"errors": ["Sintáctico|1|Se esperaba '}'"]}"#)
        .unwrap();
    for view in [ViewKind::Tokens, ViewKind::Ast, ViewKind::Symbols, ViewKind::Metrics] {
        let text = render_view(&response, view, OutputFormat::Text, false).unwrap();
        assert!(
            text.contains("Compila un programa") || text.contains("No hay métricas"),
            "{}",
            view
        );
    }
}
