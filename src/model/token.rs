/*!
# Token Model

Lexical tokens as emitted by the compiler service, plus the Spanish display
vocabulary the tokens view uses.
*/

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Token categories produced by the lexical phase.
///
/// The set is open on the wire: a category this viewer does not know yet
/// must keep rendering, so unknown strings pass through as [`TokenType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    Integer,
    Float,
    String,
    Char,
    /// Category outside the known vocabulary; rendered as its own label.
    Other(String),
}

impl TokenType {
    /// Nombre tal como lo emite el servicio.
    pub fn wire_name(&self) -> &str {
        match self {
            TokenType::Keyword => "KEYWORD",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Operator => "OPERATOR",
            TokenType::Delimiter => "DELIMITER",
            TokenType::Integer => "INTEGER",
            TokenType::Float => "FLOAT",
            TokenType::String => "STRING",
            TokenType::Char => "CHAR",
            TokenType::Other(other) => other,
        }
    }

    /// Parses a wire name, falling back to [`TokenType::Other`].
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "KEYWORD" => TokenType::Keyword,
            "IDENTIFIER" => TokenType::Identifier,
            "OPERATOR" => TokenType::Operator,
            "DELIMITER" => TokenType::Delimiter,
            "INTEGER" => TokenType::Integer,
            "FLOAT" => TokenType::Float,
            "STRING" => TokenType::String,
            "CHAR" => TokenType::Char,
            _ => TokenType::Other(raw.to_string()),
        }
    }

    /// Etiqueta en español para la vista de tokens.
    pub fn display_label(&self) -> &str {
        match self {
            TokenType::Keyword => "PALABRA CLAVE",
            TokenType::Identifier => "IDENTIFICADOR",
            TokenType::Operator => "OPERADOR",
            TokenType::Delimiter => "DELIMITADOR",
            TokenType::Integer => "ENTERO",
            TokenType::Float => "FLOTANTE",
            TokenType::String => "CADENA",
            TokenType::Char => "CARACTER",
            TokenType::Other(other) => other,
        }
    }

    /// Stable theme color for the category (hex).
    pub fn color_hex(&self) -> &'static str {
        match self {
            TokenType::Keyword => "#d73a49",
            TokenType::Identifier => "#BB86FC",
            TokenType::Operator => "#03DAC6",
            TokenType::Delimiter => "#B0B0B0",
            TokenType::Integer | TokenType::Float => "#FF9800",
            TokenType::String | TokenType::Char => "#4CAF50",
            TokenType::Other(_) => "#B0B0B0",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for TokenType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TokenType::from_wire(&raw))
    }
}

/// One lexical token with its source position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}
