/*!
# Diagnostic Parser

The service reports problems as flat strings in the fixed format
`"CATEGORÍA|LÍNEA|MENSAJE"`. This module parses them into structured
records and classifies the localized category into a severity used for
styling. A string that does not fit the format is not an error - it
degrades to a General diagnostic carrying the raw text.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centinela de línea cuando el servicio no pudo ubicar el problema.
pub const UNKNOWN_LINE: &str = "?";

/// Severity buckets for the localized diagnostic categories.
///
/// Drives presentation styling only; no control flow depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Lexical,
    Syntactic,
    Semantic,
    General,
}

impl Severity {
    /// Stable style-class name for the severity.
    pub fn color_class(&self) -> &'static str {
        match self {
            Severity::Lexical => "error-lexical",
            Severity::Syntactic => "error-syntactic",
            Severity::Semantic => "error-semantic",
            Severity::General => "error-general",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Lexical => "lexical",
            Severity::Syntactic => "syntactic",
            Severity::Semantic => "semantic",
            Severity::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// One structured compiler diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Localized category exactly as reported (`"Léxico"`, `"Semántico"`, ...).
    pub category: String,
    /// Source line as a string; `"?"` or `"0"` mean no usable line.
    pub line: String,
    pub message: String,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        classify(&self.category)
    }

    /// Whether the line badge should be shown at all.
    pub fn has_line(&self) -> bool {
        self.line != "0" && self.line != UNKNOWN_LINE
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_line() {
            write!(f, "[{}] Línea {}: {}", self.category, self.line, self.message)
        } else {
            write!(f, "[{}] {}", self.category, self.message)
        }
    }
}

/// Parses one raw diagnostic string.
///
/// Splits on `|`; with at least three parts the tail is rejoined so pipes
/// inside the message survive. Anything shorter degrades to General with
/// the raw string as message.
pub fn parse(raw: &str) -> Diagnostic {
    let parts: Vec<&str> = raw.split('|').collect();
    if parts.len() >= 3 {
        Diagnostic {
            category: parts[0].to_string(),
            line: parts[1].to_string(),
            message: parts[2..].join("|"),
        }
    } else {
        Diagnostic {
            category: "General".to_string(),
            line: UNKNOWN_LINE.to_string(),
            message: raw.to_string(),
        }
    }
}

/// Parses the whole error list of a compile result.
pub fn parse_all(raw: &[String]) -> Vec<Diagnostic> {
    raw.iter().map(|entry| parse(entry)).collect()
}

/// Case-insensitive match of the localized category vocabulary.
pub fn classify(category: &str) -> Severity {
    match category.to_lowercase().as_str() {
        "léxico" => Severity::Lexical,
        "sintáctico" => Severity::Syntactic,
        "semántico" => Severity::Semantic,
        _ => Severity::General,
    }
}
