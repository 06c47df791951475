/*!
# Scope Tree Controller

Expand/collapse state and recursive count aggregation over the nested
symbol-scope tree. The toggle state is keyed by `scope_name` - two scopes
sharing a name share expand state. That aliasing is a known structural gap
of the contract and is preserved; stable per-node identity for rendering
comes from the [`ScopeArena`] path keys instead.
*/

mod arena;

pub use arena::{ArenaScope, ScopeArena, ScopeId};

use std::collections::HashSet;

use crate::model::{ScopeTable, SymbolType};

/// Nombre del scope raíz cuando aún no se ha cargado ninguna tabla.
pub const DEFAULT_ROOT_SCOPE: &str = "global";

/// Session-local expand/collapse state over one scope tree.
///
/// The only mutable entity of the viewer. It resets whenever a new table
/// replaces the previous one ([`ScopeTreeController::initialize`]) and
/// otherwise changes only through explicit toggle actions.
#[derive(Debug, Clone)]
pub struct ScopeTreeController {
    expanded: HashSet<String>,
    root_name: String,
}

impl ScopeTreeController {
    pub fn new() -> Self {
        let mut expanded = HashSet::new();
        expanded.insert(DEFAULT_ROOT_SCOPE.to_string());
        ScopeTreeController {
            expanded,
            root_name: DEFAULT_ROOT_SCOPE.to_string(),
        }
    }

    /// Resets state for a freshly loaded table: the root and its direct
    /// children start expanded, deeper descendants collapsed.
    pub fn initialize(&mut self, table: &ScopeTable) {
        self.root_name = table.scope_name.clone();
        self.expanded.clear();
        self.expanded.insert(table.scope_name.clone());
        for child in &table.children {
            self.expanded.insert(child.scope_name.clone());
        }
    }

    /// Flips the expand state of one scope name. Self-inverse.
    pub fn toggle(&mut self, scope_name: &str) {
        if !self.expanded.remove(scope_name) {
            self.expanded.insert(scope_name.to_string());
        }
    }

    /// Expands every scope reachable in the table.
    pub fn expand_all(&mut self, table: &ScopeTable) {
        self.expanded.clear();
        collect_scope_names(table, &mut self.expanded);
    }

    /// Collapses back to the root entry only.
    ///
    /// Deliberately narrower than [`ScopeTreeController::initialize`]:
    /// "fully collapsed" means literally the root, direct children stay
    /// collapsed until toggled.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.expanded.insert(self.root_name.clone());
    }

    pub fn is_expanded(&self, scope_name: &str) -> bool {
        self.expanded.contains(scope_name)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

impl Default for ScopeTreeController {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_scope_names(table: &ScopeTable, names: &mut HashSet<String>) {
    names.insert(table.scope_name.clone());
    for child in &table.children {
        collect_scope_names(child, names);
    }
}

/// Total scopes in the tree, the table itself included.
///
/// Recomputed on demand; invariant to the expand/collapse state.
pub fn count_scopes(table: &ScopeTable) -> usize {
    1 + table.children.iter().map(count_scopes).sum::<usize>()
}

/// Total symbols declared as variables, across the whole tree.
pub fn count_variables(table: &ScopeTable) -> usize {
    let own = table
        .symbols
        .values()
        .filter(|symbol| symbol.symbol_type == SymbolType::Variable)
        .count();
    own + table.children.iter().map(count_variables).sum::<usize>()
}
