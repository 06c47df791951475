/*!
# Text Renderer

Consola: una sección por vista, con los encabezados y textos de la
interfaz original. Colors are optional so the output stays usable in
files and CI logs.
*/

use colored::{Color, Colorize};

use super::ViewKind;
use crate::ast_view::{self, ClassTag, DisplayNode, RawNode};
use crate::diagnostics::{self, Severity};
use crate::model::{CompileMetrics, CompileResponse, Quadruple, ScopeTable, Token};
use crate::quadruples::{OptimizationComparison, QuadrupleSummary};
use crate::scopes::{count_scopes, count_variables, ScopeTreeController};

/// Console renderer for the artifact views.
pub struct TextRenderer {
    use_colors: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        TextRenderer { use_colors: true }
    }

    /// Sin colores: para archivos y CI.
    pub fn plain() -> Self {
        TextRenderer { use_colors: false }
    }

    pub fn render(&self, view: ViewKind, response: &CompileResponse) -> String {
        match view {
            ViewKind::Tokens => self.render_tokens(&response.tokens, &response.errors),
            ViewKind::Ast => self.render_ast(response.ast.as_ref()),
            ViewKind::Symbols => self.render_symbols(response.symbol_table.as_ref()),
            ViewKind::Quadruples => self.render_quadruples(&response.intermediate_code),
            ViewKind::Optimization => self.render_optimization(
                &response.intermediate_code,
                &response.optimized_code,
                &response.optimization_log,
            ),
            ViewKind::ObjectCode => self.render_object_code(response.object_code.as_deref()),
            ViewKind::Metrics => self.render_metrics(response.metrics.as_ref()),
        }
    }

    /// One-screen digest of the whole compile result.
    pub fn render_summary(&self, response: &CompileResponse) -> String {
        let mut out = self.header("Resultado de Compilación");

        let status = if response.success {
            self.paint("Compilación exitosa", Color::Green)
        } else {
            self.paint("Compilación con errores", Color::Red)
        };
        out.push_str(&format!("{}\n\n", status));

        out.push_str(&format!("Tokens: {}\n", response.tokens.len()));
        if let Some(table) = &response.symbol_table {
            out.push_str(&format!(
                "Scopes: {} | Variables: {}\n",
                count_scopes(table),
                count_variables(table)
            ));
        }
        let comparison =
            OptimizationComparison::new(&response.intermediate_code, &response.optimized_code);
        out.push_str(&format!(
            "Cuádruplos: {} -> {} ({:.1}% de reducción)\n",
            comparison.original_count, comparison.optimized_count, comparison.reduction_pct
        ));
        out.push_str(&format!(
            "Errores: {} | Advertencias: {}\n",
            response.errors.len(),
            response.warnings.len()
        ));

        if !response.errors.is_empty() {
            out.push('\n');
            out.push_str(&self.render_errors(&response.errors));
        }
        out
    }

    /// Panel de errores con insignias de categoría y línea.
    pub fn render_errors(&self, errors: &[String]) -> String {
        let mut out = String::new();
        out.push_str(&self.bold(&format!("Lista de Errores ({})\n", errors.len())));
        for raw in errors {
            let diagnostic = diagnostics::parse(raw);
            let color = severity_color(diagnostic.severity());
            out.push_str(&format!("  {}\n", self.paint(&diagnostic.to_string(), color)));
        }
        out
    }

    // --- Tokens ---

    fn render_tokens(&self, tokens: &[Token], errors: &[String]) -> String {
        let mut out = self.header("Tokens - Análisis Léxico");
        if tokens.is_empty() {
            out.push_str("Compila un programa para ver los tokens generados\n");
            return out;
        }

        out.push_str(&format!("Total de tokens: {}\n\n", tokens.len()));

        let rows: Vec<Vec<String>> = tokens
            .iter()
            .map(|token| {
                vec![
                    token.token_type.display_label().to_string(),
                    token.value.clone(),
                    token.line.to_string(),
                    token.column.to_string(),
                ]
            })
            .collect();
        out.push_str(&self.format_table(&["Tipo", "Valor", "Línea", "Columna"], rows));

        if !errors.is_empty() {
            out.push('\n');
            out.push_str(&self.bold("Errores Léxicos:\n"));
            for raw in errors {
                out.push_str(&format!("  {}\n", diagnostics::parse(raw)));
            }
        }
        out
    }

    // --- AST ---

    fn render_ast(&self, ast: Option<&RawNode>) -> String {
        let mut out = self.header("Árbol de Sintaxis Abstracta (AST)");
        match ast_view::normalize(ast) {
            Ok(None) => out.push_str("Compila un programa para visualizar el Árbol AST\n"),
            Ok(Some(tree)) => {
                out.push_str(&format!("Nodos: {}\n\n", tree.node_count()));
                self.write_tree(&mut out, &tree, "", true, true);
            }
            // Degradado, nunca fatal: el árbol no se muestra pero la vista sigue viva.
            Err(err) => out.push_str(&format!("No se pudo visualizar el árbol: {}\n", err)),
        }
        out
    }

    fn write_tree(&self, out: &mut String, node: &DisplayNode, prefix: &str, last: bool, root: bool) {
        let connector = if root {
            ""
        } else if last {
            "└── "
        } else {
            "├── "
        };

        let mut line = self.paint(node.spanish_label(), node_color(node));
        if node.has_display_value() {
            line.push_str(&format!(" ({})", node.display_value));
        }
        out.push_str(&format!("{}{}{}\n", prefix, connector, line));

        let child_prefix = if root {
            String::new()
        } else if last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };
        let count = node.children.len();
        for (index, child) in node.children.iter().enumerate() {
            self.write_tree(out, child, &child_prefix, index + 1 == count, false);
        }
    }

    // --- Tabla de símbolos ---

    fn render_symbols(&self, table: Option<&ScopeTable>) -> String {
        let mut out = self.header("Tabla de Símbolos");
        let table = match table {
            Some(table) => table,
            None => {
                out.push_str("Compila un programa para ver los Scopes.\n");
                return out;
            }
        };

        out.push_str(&format!(
            "Scopes Totales: {} | Variables: {}\n\n",
            count_scopes(table),
            count_variables(table)
        ));

        let mut controller = ScopeTreeController::new();
        controller.expand_all(table);
        self.write_scope(&mut out, table, &controller, 0);
        out
    }

    fn write_scope(
        &self,
        out: &mut String,
        table: &ScopeTable,
        controller: &ScopeTreeController,
        level: usize,
    ) {
        let indent = "  ".repeat(level);
        let expanded = controller.is_expanded(&table.scope_name);
        let marker = if expanded { "▼" } else { "►" };

        let mut header = format!(
            "{}{} {} (Nivel {}): {} var/func",
            indent,
            marker,
            self.bold(&table.scope_name),
            level,
            table.symbol_count()
        );
        if table.child_count() > 0 {
            header.push_str(&format!(" | {} sub-scopes", table.child_count()));
        }
        out.push_str(&header);
        out.push('\n');

        if !expanded {
            return;
        }

        if table.symbols.is_empty() {
            out.push_str(&format!("{}  (Sin variables declaradas en este nivel)\n", indent));
        } else {
            let rows: Vec<Vec<String>> = table
                .symbols_by_line()
                .into_iter()
                .map(|symbol| {
                    let status = format!(
                        "{} {}",
                        if symbol.initialized { "Inic. ✓" } else { "Inic. ✗" },
                        if symbol.used { "Usada ✓" } else { "No Usada ⚠" },
                    );
                    vec![
                        symbol.name.clone(),
                        symbol.data_type.to_string(),
                        symbol
                            .memory_address
                            .map(|address| format!("#{}", address))
                            .unwrap_or_else(|| "-".to_string()),
                        symbol.line.to_string(),
                        status,
                    ]
                })
                .collect();
            let body = self.format_table(&["Nombre", "Tipo", "Dir. Mem", "Línea", "Estado"], rows);
            for line in body.lines() {
                out.push_str(&format!("{}  {}\n", indent, line));
            }
        }

        for child in &table.children {
            self.write_scope(out, child, controller, level + 1);
        }
    }

    // --- Cuádruplos ---

    fn render_quadruples(&self, quadruples: &[Quadruple]) -> String {
        let mut out = self.header("Código Intermedio - Cuádruplos");
        if quadruples.is_empty() {
            out.push_str("Compila un programa para visualizar los Cuádruplos\n");
            return out;
        }

        let summary = QuadrupleSummary::of(quadruples);
        out.push_str(&format!(
            "Total: {} cuádruplos | Temporales: {} | Etiquetas: {}\n\n",
            summary.total, summary.temporaries, summary.labels
        ));

        let rows: Vec<Vec<String>> = quadruples
            .iter()
            .map(|quad| {
                vec![
                    quad.index.to_string(),
                    quad.operator.clone(),
                    quad.arg1.clone().unwrap_or_else(|| "-".to_string()),
                    quad.arg2.clone().unwrap_or_else(|| "-".to_string()),
                    quad.result.clone().unwrap_or_else(|| "-".to_string()),
                    crate::quadruples::classify(quad).to_string(),
                ]
            })
            .collect();
        out.push_str(&self.format_table(
            &["#", "Operador", "Arg1", "Arg2", "Resultado", "Tipo"],
            rows,
        ));

        out.push('\n');
        out.push_str("Leyenda: Aritméticos · Asignaciones · Comparaciones · Saltos · Etiquetas · Returns · Print\n");
        out
    }

    // --- Optimización ---

    fn render_optimization(
        &self,
        original: &[Quadruple],
        optimized: &[Quadruple],
        log: &[String],
    ) -> String {
        let mut out = self.header("Optimización de Código");
        if original.is_empty() && optimized.is_empty() {
            out.push_str("Compila un programa para visualizar las optimizaciones\n");
            return out;
        }

        let comparison = OptimizationComparison::new(original, optimized);
        out.push_str(&format!(
            "Cuádruplos Originales: {}\nCuádruplos Optimizados: {}\n",
            comparison.original_count, comparison.optimized_count
        ));
        let reduction = format!("Reducción: {:.1}%", comparison.reduction_pct);
        let reduction_color = if comparison.improved() {
            Color::Green
        } else {
            Color::Yellow
        };
        out.push_str(&format!("{}\n\n", self.paint(&reduction, reduction_color)));

        out.push_str(&self.bold("Bitácora de Optimizaciones Aplicadas\n"));
        if log.is_empty() {
            out.push_str("  No se encontraron optimizaciones posibles.\n");
        } else {
            for entry in log {
                out.push_str(&format!("  ✓ {}\n", entry));
            }
        }

        out.push('\n');
        out.push_str(&self.bold("Original:\n"));
        for quad in original {
            out.push_str(&format!("  {}\n", quad));
        }
        out.push('\n');
        out.push_str(&self.bold("Optimizado:\n"));
        for quad in optimized {
            out.push_str(&format!("  {}\n", quad));
        }
        out
    }

    // --- Código objeto ---

    fn render_object_code(&self, object_code: Option<&str>) -> String {
        let mut out = self.header("Código Objeto (Python)");
        match object_code {
            Some(code) if !code.is_empty() => {
                out.push_str(code);
                if !code.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => out.push_str("Compila un programa para ver el código objeto generado\n"),
        }
        out
    }

    // --- Métricas ---

    fn render_metrics(&self, metrics: Option<&CompileMetrics>) -> String {
        let mut out = self.header("Métricas de Compilación");
        let metrics = match metrics {
            Some(metrics) => metrics,
            None => {
                out.push_str("No hay métricas disponibles\n");
                return out;
            }
        };

        out.push_str(&format!(
            "Tiempo de Compilación: {:.4} ms\n",
            metrics.compilation_time
        ));
        out.push_str(&format!("Tokens Generados: {}\n", metrics.tokens_count));
        out.push_str(&format!(
            "Líneas de Código Intermedio: {}\n",
            metrics.quadruples_count
        ));
        out.push_str(&format!(
            "Reducción por Optimización: {:.1}%\n",
            metrics.reduction_or_zero()
        ));
        out.push_str(&format!("Símbolos en Tabla: {}\n", metrics.symbols_count));

        let errors_line = format!("Errores Encontrados: {}", metrics.errors_count);
        if metrics.has_errors() {
            out.push_str(&format!("{}\n", self.paint(&errors_line, Color::Red)));
        } else {
            out.push_str(&format!("{}\n", errors_line));
        }
        out
    }

    // --- Helpers ---

    fn header(&self, title: &str) -> String {
        format!(
            "{}\n{}\n",
            self.bold(title),
            "=".repeat(title.chars().count())
        )
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Tabla alineada por columnas, al estilo de la salida de consola.
    fn format_table(&self, headers: &[&str], rows: Vec<Vec<String>>) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (index, cell) in row.iter().enumerate() {
                if index < widths.len() {
                    widths[index] = widths[index].max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        for (index, head) in headers.iter().enumerate() {
            if index > 0 {
                out.push_str(" │ ");
            }
            out.push_str(&pad(head, widths[index]));
        }
        out.push('\n');
        for (index, width) in widths.iter().enumerate() {
            if index > 0 {
                out.push_str("─┼─");
            }
            out.push_str(&"─".repeat(*width));
        }
        out.push('\n');
        for row in rows {
            for (index, cell) in row.iter().enumerate() {
                if index > 0 {
                    out.push_str(" │ ");
                }
                if index < widths.len() {
                    out.push_str(&pad(cell, widths[index]));
                } else {
                    out.push_str(cell);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(len)));
    out
}

fn node_color(node: &DisplayNode) -> Color {
    let class = &node.classification;
    if class.has(ClassTag::Program) {
        Color::Cyan
    } else if class.has(ClassTag::Decl) {
        Color::Green
    } else if class.has(ClassTag::Operator) {
        Color::Magenta
    } else if class.has(ClassTag::Literal) {
        Color::Yellow
    } else if class.has(ClassTag::Control) {
        Color::Blue
    } else {
        Color::White
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Lexical => Color::Red,
        Severity::Syntactic => Color::Magenta,
        Severity::Semantic => Color::Yellow,
        Severity::General => Color::Blue,
    }
}
