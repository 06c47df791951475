/*!
# Symbol Table Model

Nested symbol-scope tables as reported by the semantic phase. Scopes nest
lexically; each scope owns a map of declared symbols. Missing `symbols` or
`children` deserialize to empty collections, never a failure.
*/

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Symbol kinds the service declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    Variable,
    Function,
    Parameter,
    Temporal,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolType::Variable => "variable",
            SymbolType::Function => "function",
            SymbolType::Parameter => "parameter",
            SymbolType::Temporal => "temporal",
        };
        write!(f, "{}", name)
    }
}

/// Data types of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int,
    Float,
    Bool,
    String,
    Void,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
            DataType::String => "string",
            DataType::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// Metadata of one declared name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: SymbolType,
    pub data_type: DataType,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub initialized: bool,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub memory_address: Option<u32>,
    #[serde(default)]
    pub dimensions: Vec<u32>,
    #[serde(default)]
    pub parameters: Vec<DataType>,
}

impl Symbol {
    /// Una variable usada sin inicializar merece resaltado en la vista.
    pub fn is_uninitialized_use(&self) -> bool {
        self.used && !self.initialized
    }

    /// Declared but never read.
    pub fn is_unused(&self) -> bool {
        !self.used
    }
}

fn default_scope_name() -> String {
    "global".to_string()
}

/// One lexical scope and its nested children.
///
/// `scope_name` is unique only by convention; sibling scopes may collide.
/// Stable identity for rendering comes from [`crate::scopes::ScopeArena`],
/// not from this name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeTable {
    #[serde(default = "default_scope_name")]
    pub scope_name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub symbols: HashMap<String, Symbol>,
    #[serde(default)]
    pub children: Vec<ScopeTable>,
}

impl ScopeTable {
    /// Empty root table, as the service sends when semantics failed.
    pub fn empty() -> Self {
        ScopeTable {
            scope_name: default_scope_name(),
            level: 0,
            symbols: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Symbols ordered by declaration line, then name, for deterministic
    /// rendering (the wire map carries no meaningful order).
    pub fn symbols_by_line(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.symbols.values().collect();
        symbols.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.name.cmp(&b.name)));
        symbols
    }
}

impl Default for ScopeTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_deserialize_empty() {
        let table: ScopeTable = serde_json::from_str(r#"{"scope_name": "global"}"#).unwrap();
        assert_eq!(table.scope_name, "global");
        assert!(table.symbols.is_empty());
        assert!(table.children.is_empty());
        assert_eq!(table.level, 0);
    }

    #[test]
    fn test_scope_name_defaults_to_global() {
        let table: ScopeTable = serde_json::from_str("{}").unwrap();
        assert_eq!(table.scope_name, "global");
    }

    #[test]
    fn test_symbol_deserialization() {
        let raw = r#"{
            "name": "contador",
            "symbol_type": "variable",
            "data_type": "int",
            "scope": "main",
            "line": 3,
            "initialized": true,
            "used": false,
            "memory_address": 1000
        }"#;
        let symbol: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(symbol.symbol_type, SymbolType::Variable);
        assert_eq!(symbol.data_type, DataType::Int);
        assert_eq!(symbol.memory_address, Some(1000));
        assert!(symbol.is_unused());
        assert!(!symbol.is_uninitialized_use());
    }

    #[test]
    fn test_symbols_by_line_is_deterministic() {
        let mut table = ScopeTable::empty();
        for (name, line) in [("b", 5u32), ("a", 5), ("c", 2)] {
            table.symbols.insert(
                name.to_string(),
                Symbol {
                    name: name.to_string(),
                    symbol_type: SymbolType::Variable,
                    data_type: DataType::Int,
                    scope: "global".to_string(),
                    line,
                    initialized: false,
                    used: false,
                    memory_address: None,
                    dimensions: Vec::new(),
                    parameters: Vec::new(),
                },
            );
        }
        let names: Vec<&str> = table.symbols_by_line().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
