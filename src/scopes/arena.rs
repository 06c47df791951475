/*!
# Scope Arena

Stable identity for scope-tree rendering. `scope_name` is only unique by
convention, so list keys are synthesized from the full ancestor path plus
the sibling index at load time. The arena is rebuilt per compile result
and addressed by integer ids.
*/

use serde::Serialize;

use crate::model::ScopeTable;

/// Stable index of a scope within its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScopeId(pub usize);

/// One scope flattened into the arena, preorder.
#[derive(Debug, Clone, Serialize)]
pub struct ArenaScope {
    pub id: ScopeId,
    pub parent: Option<ScopeId>,
    pub scope_name: String,
    /// Cadena de ancestros más índice de hermano: `"global/main#0/if_block#0"`.
    pub path_key: String,
    pub depth: usize,
    pub symbol_count: usize,
    pub children: Vec<ScopeId>,
}

/// Flattened scope tree with path-based render keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScopeArena {
    scopes: Vec<ArenaScope>,
}

impl ScopeArena {
    /// Flattens a table into arena form, assigning ids in preorder.
    pub fn build(table: &ScopeTable) -> Self {
        let mut arena = ScopeArena { scopes: Vec::new() };
        arena.push_scope(table, None, table.scope_name.clone());
        arena
    }

    fn push_scope(&mut self, table: &ScopeTable, parent: Option<ScopeId>, path_key: String) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        let depth = match parent {
            Some(parent_id) => self.scopes[parent_id.0].depth + 1,
            None => 0,
        };
        self.scopes.push(ArenaScope {
            id,
            parent,
            scope_name: table.scope_name.clone(),
            path_key: path_key.clone(),
            depth,
            symbol_count: table.symbol_count(),
            children: Vec::new(),
        });

        for (index, child) in table.children.iter().enumerate() {
            let child_key = format!("{}/{}#{}", path_key, child.scope_name, index);
            let child_id = self.push_scope(child, Some(id), child_key);
            self.scopes[id.0].children.push(child_id);
        }
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&ArenaScope> {
        self.scopes.get(id.0)
    }

    pub fn root(&self) -> Option<&ArenaScope> {
        self.scopes.first()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArenaScope> {
        self.scopes.iter()
    }
}
