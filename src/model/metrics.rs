/*!
# Compile Metrics Model

Aggregate counters the service attaches to each compile result. All fields
default to zero so a partial metrics dictionary still renders; the
optimization reduction stays optional because the engine derives it when
the service omits it (see [`crate::quadruples::ensure_reduction_metric`]).
*/

use serde::{Deserialize, Serialize};

/// Contadores agregados de una compilación.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompileMetrics {
    /// Wall-clock time of the full pipeline, in milliseconds.
    #[serde(default)]
    pub compilation_time: f64,
    #[serde(default)]
    pub tokens_count: usize,
    #[serde(default)]
    pub ast_nodes_count: usize,
    #[serde(default)]
    pub symbols_count: usize,
    #[serde(default)]
    pub quadruples_count: usize,
    #[serde(default)]
    pub temporals_count: usize,
    #[serde(default)]
    pub errors_count: usize,
    #[serde(default)]
    pub warnings_count: usize,
    /// Signed percentage; negative when optimization grew the sequence.
    /// Absent unless the service supplied it or the engine derived it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_reduction: Option<f64>,
}

impl CompileMetrics {
    pub fn has_errors(&self) -> bool {
        self.errors_count > 0
    }

    /// Reduction to display: the stored value, or zero when absent.
    pub fn reduction_or_zero(&self) -> f64 {
        self.optimization_reduction.unwrap_or(0.0)
    }
}
