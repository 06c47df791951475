/*!
# Quadruple Diff Engine

Pure derivations over the before/after instruction sequences: the signed
reduction percentage, the compute-if-absent contract for the metrics
record, badge classification and the display summary counts. Everything
here is side-effect-free and cheap enough to recompute per render.
*/

use serde::Serialize;

use crate::model::{CompileMetrics, CompileResponse, Quadruple};

/// Prefijo convencional de los resultados temporales (`t1`, `t2`, ...).
pub const TEMPORARY_PREFIX: &str = "t";

/// Signed percentage reduction between the two sequences.
///
/// Zero when the original is empty; negative when optimization grew the
/// sequence. Never clamped.
pub fn reduction_pct(original: &[Quadruple], optimized: &[Quadruple]) -> f64 {
    if original.is_empty() {
        return 0.0;
    }
    (original.len() as f64 - optimized.len() as f64) / original.len() as f64 * 100.0
}

/// Reduction value with its provenance: supplied by the service, or
/// derived here because the service omitted it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum ReductionMetric {
    Provided(f64),
    Derived(f64),
}

impl ReductionMetric {
    pub fn value(self) -> f64 {
        match self {
            ReductionMetric::Provided(value) | ReductionMetric::Derived(value) => value,
        }
    }

    pub fn is_derived(self) -> bool {
        matches!(self, ReductionMetric::Derived(_))
    }
}

/// Compute-if-absent for the reduction metric.
///
/// A value already present (authoritative, from the service) is never
/// overwritten; only when absent is the reduction derived and stored.
/// Idempotent: repeated calls with the same inputs keep the same stored
/// value and never double-apply.
pub fn ensure_reduction_metric(
    metrics: &mut CompileMetrics,
    original: &[Quadruple],
    optimized: &[Quadruple],
) -> ReductionMetric {
    match metrics.optimization_reduction {
        Some(value) => ReductionMetric::Provided(value),
        None => {
            let derived = reduction_pct(original, optimized);
            metrics.optimization_reduction = Some(derived);
            ReductionMetric::Derived(derived)
        }
    }
}

/// Applies [`ensure_reduction_metric`] to a whole compile response.
///
/// Returns `None` when the response carries no metrics record at all.
pub fn ensure_response_reduction(response: &mut CompileResponse) -> Option<ReductionMetric> {
    let CompileResponse {
        metrics,
        intermediate_code,
        optimized_code,
        ..
    } = response;
    metrics
        .as_mut()
        .map(|metrics| ensure_reduction_metric(metrics, intermediate_code, optimized_code))
}

/// Insignia para un cuádruplo; tipos desconocidos pasan sin cambio.
pub fn classify(quadruple: &Quadruple) -> &str {
    quadruple.quadruple_type.badge_label()
}

/// Display counts over one instruction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuadrupleSummary {
    pub total: usize,
    /// Results following the temporary-variable prefix convention.
    pub temporaries: usize,
    pub labels: usize,
}

impl QuadrupleSummary {
    pub fn of(quadruples: &[Quadruple]) -> Self {
        QuadrupleSummary {
            total: quadruples.len(),
            temporaries: quadruples.iter().filter(|q| q.has_temporary_result()).count(),
            labels: quadruples.iter().filter(|q| q.is_label()).count(),
        }
    }
}

/// Before/after comparison for the optimization view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationComparison {
    pub original_count: usize,
    pub optimized_count: usize,
    pub reduction_pct: f64,
}

impl OptimizationComparison {
    pub fn new(original: &[Quadruple], optimized: &[Quadruple]) -> Self {
        OptimizationComparison {
            original_count: original.len(),
            optimized_count: optimized.len(),
            reduction_pct: reduction_pct(original, optimized),
        }
    }

    /// La optimización logró acortar la secuencia.
    pub fn improved(&self) -> bool {
        self.reduction_pct > 0.0
    }
}
