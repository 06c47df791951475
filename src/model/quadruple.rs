/*!
# Quadruple Model

Three/four-address intermediate instructions: an operator, up to two
operands and one result. The instruction type vocabulary is fixed but must
tolerate values outside it - an unknown type renders as its own label.
*/

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Instruction categories of the intermediate representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuadrupleKind {
    Arithmetic,
    Assignment,
    Comparison,
    Jump,
    Label,
    Return,
    Write,
    Call,
    Parameter,
    /// Type outside the fixed vocabulary; passes through unchanged.
    Other(String),
}

impl QuadrupleKind {
    /// Nombre tal como lo emite el servicio.
    pub fn wire_name(&self) -> &str {
        match self {
            QuadrupleKind::Arithmetic => "arithmetic",
            QuadrupleKind::Assignment => "assignment",
            QuadrupleKind::Comparison => "comparison",
            QuadrupleKind::Jump => "jump",
            QuadrupleKind::Label => "label",
            QuadrupleKind::Return => "return",
            QuadrupleKind::Write => "write",
            QuadrupleKind::Call => "call",
            QuadrupleKind::Parameter => "parameter",
            QuadrupleKind::Other(other) => other,
        }
    }

    /// Parses a wire name, falling back to [`QuadrupleKind::Other`].
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "arithmetic" => QuadrupleKind::Arithmetic,
            "assignment" => QuadrupleKind::Assignment,
            "comparison" => QuadrupleKind::Comparison,
            "jump" => QuadrupleKind::Jump,
            "label" => QuadrupleKind::Label,
            "return" => QuadrupleKind::Return,
            "write" => QuadrupleKind::Write,
            "call" => QuadrupleKind::Call,
            "parameter" => QuadrupleKind::Parameter,
            _ => QuadrupleKind::Other(raw.to_string()),
        }
    }

    /// Insignia en español para la columna de tipo.
    ///
    /// Un tipo desconocido conserva su nombre de cable tal cual.
    pub fn badge_label(&self) -> &str {
        match self {
            QuadrupleKind::Arithmetic => "Aritmética",
            QuadrupleKind::Assignment => "Asignación",
            QuadrupleKind::Comparison => "Comparación",
            QuadrupleKind::Jump => "Salto",
            QuadrupleKind::Label => "Etiqueta",
            QuadrupleKind::Return => "Retorno",
            QuadrupleKind::Write => "Escritura",
            QuadrupleKind::Call => "Llamada",
            QuadrupleKind::Parameter => "Parámetro",
            QuadrupleKind::Other(other) => other,
        }
    }
}

impl fmt::Display for QuadrupleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl Serialize for QuadrupleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for QuadrupleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(QuadrupleKind::from_wire(&raw))
    }
}

/// One intermediate instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quadruple {
    pub index: usize,
    pub operator: String,
    #[serde(default)]
    pub arg1: Option<String>,
    #[serde(default)]
    pub arg2: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    pub quadruple_type: QuadrupleKind,
    #[serde(default)]
    pub line: Option<u32>,
}

impl Quadruple {
    /// El resultado sigue la convención de temporales (`t1`, `t2`, ...).
    pub fn has_temporary_result(&self) -> bool {
        self.result
            .as_deref()
            .map(|r| r.starts_with(crate::quadruples::TEMPORARY_PREFIX))
            .unwrap_or(false)
    }

    pub fn is_label(&self) -> bool {
        self.quadruple_type == QuadrupleKind::Label
    }

    fn slot(value: &Option<String>) -> &str {
        value.as_deref().filter(|v| !v.is_empty()).unwrap_or("_")
    }
}

impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {} {}",
            self.index,
            self.operator,
            Self::slot(&self.arg1),
            Self::slot(&self.arg2),
            Self::slot(&self.result),
        )
    }
}
