/*!
# Error System for Compilador Viewer

Typed failure conditions raised while turning raw compiler artifacts into
display structures. None of them is fatal to a hosting process: every path
resolves to a degraded-but-valid display state upstream.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Límite de recursión para artefactos en forma de árbol.
///
/// Real artifacts track block nesting and stay far below this. The bound
/// exists so that a cyclic structure (which the service contract forbids)
/// surfaces as a typed error instead of a hang.
pub const MAX_TREE_DEPTH: usize = 512;

/// Errors produced by the artifact walkers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ArtifactError {
    /// The tree exceeded [`MAX_TREE_DEPTH`] levels.
    #[error("artefacto demasiado profundo (más de {limit} niveles): posiblemente cíclico")]
    TooDeep {
        /// Depth limit that was hit.
        limit: usize,
    },
}

impl ArtifactError {
    /// Construye el error de profundidad con el límite global.
    pub fn too_deep() -> Self {
        ArtifactError::TooDeep {
            limit: MAX_TREE_DEPTH,
        }
    }
}
