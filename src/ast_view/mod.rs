/*!
# AST Display Tree

Converts the loosely-typed AST the service returns into a uniform,
renderable tree: every node gets a label, an optional display value and a
cumulative classification (declaration / operator / literal / control /
program). Child discovery is structural - the walk tolerates tags and
fields this viewer has never seen.
*/

mod normalizer;

pub use normalizer::{normalize, RawNode};

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Known AST node kinds, with a fallback for producers that grow new tags.
///
/// The kind drives display-value extraction and translation only; child
/// discovery never depends on it, so an [`NodeKind::Unknown`] node still
/// renders with its children intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Function,
    Block,
    VariableDeclaration,
    VarDecl,
    Identifier,
    BinaryExpression,
    BinaryOp,
    Literal,
    StringLiteral,
    If,
    Return,
    Print,
    Unknown,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Program" => NodeKind::Program,
            "Function" => NodeKind::Function,
            "Block" => NodeKind::Block,
            "VariableDeclaration" => NodeKind::VariableDeclaration,
            "VarDecl" => NodeKind::VarDecl,
            "Identifier" => NodeKind::Identifier,
            "BinaryExpression" => NodeKind::BinaryExpression,
            "BinaryOp" => NodeKind::BinaryOp,
            "Literal" => NodeKind::Literal,
            "String" => NodeKind::StringLiteral,
            "If" => NodeKind::If,
            "Return" => NodeKind::Return,
            "Print" => NodeKind::Print,
            _ => NodeKind::Unknown,
        }
    }
}

/// Traducciones de etiquetas de nodo para la vista del árbol.
static NODE_LABELS_ES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Program", "Programa"),
        ("Function", "Función"),
        ("Block", "Bloque"),
        ("VariableDeclaration", "DeclaraciónVar"),
        ("Identifier", "Identificador"),
        ("BinaryExpression", "ExpresiónBinaria"),
        ("Literal", "Literal"),
        ("If", "SiCondicional"),
        ("Return", "Retorno"),
        ("Print", "Imprimir"),
        ("String", "Cadena"),
        ("VarDecl", "DeclaraciónVar"),
        ("BinaryOp", "OperaciónBinaria"),
    ])
});

/// Spanish label for a node tag; unknown tags pass through untranslated.
pub fn spanish_node_label(tag: &str) -> &str {
    NODE_LABELS_ES.get(tag).copied().unwrap_or(tag)
}

/// Classification facets a node can accumulate on top of its base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassTag {
    Decl,
    Operator,
    Literal,
    Control,
    Program,
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassTag::Decl => "decl",
            ClassTag::Operator => "operator",
            ClassTag::Literal => "literal",
            ClassTag::Control => "control",
            ClassTag::Program => "program",
        };
        write!(f, "{}", name)
    }
}

/// Derived classification: the lowercased tag as base class plus zero or
/// more cumulative facets. Facets are not exclusive - a `FuncDeclOp` tag
/// would carry both `decl` and `operator`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub base: String,
    pub tags: Vec<ClassTag>,
}

impl Classification {
    /// Deriva la clasificación a partir de la etiqueta cruda.
    pub fn derive(tag: &str) -> Self {
        let mut tags = Vec::new();
        if tag.contains("Decl") {
            tags.push(ClassTag::Decl);
        }
        if tag.contains("Op") {
            tags.push(ClassTag::Operator);
        }
        if tag == "Literal" || tag == "String" {
            tags.push(ClassTag::Literal);
        }
        if matches!(tag, "Function" | "Block" | "If" | "Return" | "Print") {
            tags.push(ClassTag::Control);
        }
        if tag == "Program" {
            tags.push(ClassTag::Program);
        }
        Classification {
            base: tag.to_lowercase(),
            tags,
        }
    }

    pub fn has(&self, tag: ClassTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Space-separated class string, base first (`"binaryop operator"`).
    pub fn class_string(&self) -> String {
        let mut out = self.base.clone();
        for tag in &self.tags {
            out.push(' ');
            out.push_str(&tag.to_string());
        }
        out
    }
}

/// One node of the uniform display tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNode {
    /// Raw tag of the source node.
    pub label: String,
    /// Derived scalar shown next to the label; may be empty.
    pub display_value: String,
    pub classification: Classification,
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_tag(&self.label)
    }

    /// Etiqueta traducida para la vista.
    pub fn spanish_label(&self) -> &str {
        spanish_node_label(&self.label)
    }

    pub fn has_display_value(&self) -> bool {
        !self.display_value.is_empty()
    }

    /// Total nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DisplayNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_cumulative() {
        let class = Classification::derive("VarDeclOp");
        assert_eq!(class.base, "vardeclop");
        assert!(class.has(ClassTag::Decl));
        assert!(class.has(ClassTag::Operator));
        assert!(!class.has(ClassTag::Control));
        assert_eq!(class.class_string(), "vardeclop decl operator");
    }

    #[test]
    fn test_control_flow_tags() {
        for tag in ["Function", "Block", "If", "Return", "Print"] {
            assert!(Classification::derive(tag).has(ClassTag::Control), "{}", tag);
        }
        assert!(!Classification::derive("While").has(ClassTag::Control));
    }

    #[test]
    fn test_literal_is_exact_match_only() {
        assert!(Classification::derive("Literal").has(ClassTag::Literal));
        assert!(Classification::derive("String").has(ClassTag::Literal));
        assert!(!Classification::derive("StringLiteral").has(ClassTag::Literal));
    }

    #[test]
    fn test_program_tag() {
        let class = Classification::derive("Program");
        assert!(class.has(ClassTag::Program));
        assert_eq!(class.class_string(), "program program");
    }

    #[test]
    fn test_unknown_tag_still_classifies() {
        let class = Classification::derive("ConstDecl");
        assert_eq!(class.base, "constdecl");
        assert_eq!(class.tags, vec![ClassTag::Decl]);
    }

    #[test]
    fn test_spanish_labels() {
        assert_eq!(spanish_node_label("Program"), "Programa");
        assert_eq!(spanish_node_label("VarDecl"), "DeclaraciónVar");
        assert_eq!(spanish_node_label("BinaryOp"), "OperaciónBinaria");
        assert_eq!(spanish_node_label("WeirdTag"), "WeirdTag");
    }

    #[test]
    fn test_node_kind_fallback() {
        assert_eq!(NodeKind::from_tag("Identifier"), NodeKind::Identifier);
        assert_eq!(NodeKind::from_tag("String"), NodeKind::StringLiteral);
        assert_eq!(NodeKind::from_tag("Whatever"), NodeKind::Unknown);
    }
}
