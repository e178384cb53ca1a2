//! Error types for the Logicalizer front end.
//!
//! This module provides a unified error type [`HdlError`] that covers
//! all error conditions that can occur during lexing, parsing, elaboration
//! and model queries.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`HdlError`].
pub type Result<T> = std::result::Result<T, HdlError>;

/// Unified error type for all Logicalizer operations.
#[derive(Error, Debug)]
pub enum HdlError {
    // ============ Lexing ============
    /// Unrecognized character or malformed literal
    #[error("Lex error at line {line}, column {column}: {message}")]
    Lex {
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Parsing ============
    /// Grammar violation
    #[error("Syntax error at line {line}, column {column}: expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },

    // ============ Elaboration ============
    /// Semantic violation found while building the circuit model
    #[error("Elaboration error in module '{module}': {kind}: {detail}")]
    Elaboration {
        kind: ElaborationErrorKind,
        module: String,
        detail: String,
    },

    // ============ Queries ============
    /// Query for a module that the model does not contain
    #[error("Module '{name}' not found")]
    ModuleNotFound { name: String },

    // ============ I/O ============
    /// Error reading a source file
    #[error("Failed to read source file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The specific semantic rule an elaboration error violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElaborationErrorKind {
    DuplicateModuleName,
    DuplicateGenericParam,
    UnknownGenericParam,
    DuplicateSignalName,
    NonPositiveWidth,
}

impl fmt::Display for ElaborationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DuplicateModuleName => "DuplicateModuleName",
            Self::DuplicateGenericParam => "DuplicateGenericParam",
            Self::UnknownGenericParam => "UnknownGenericParam",
            Self::DuplicateSignalName => "DuplicateSignalName",
            Self::NonPositiveWidth => "NonPositiveWidth",
        };
        f.write_str(name)
    }
}

impl HdlError {
    /// Create a lex error
    pub fn lex(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Lex {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a syntax error
    pub fn syntax(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::Syntax {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }

    /// Create an elaboration error
    pub fn elaboration(
        kind: ElaborationErrorKind,
        module: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Elaboration {
            kind,
            module: module.into(),
            detail: detail.into(),
        }
    }

    /// Broad error category, as reported to the host boundary.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Lex { .. } => "LexError",
            Self::Syntax { .. } => "SyntaxError",
            Self::Elaboration { .. } => "ElaborationError",
            Self::ModuleNotFound { .. } => "NotFound",
            Self::FileRead { .. } => "IoError",
        }
    }

    /// The elaboration rule that was violated, if this is an elaboration error.
    pub fn elaboration_kind(&self) -> Option<ElaborationErrorKind> {
        match self {
            Self::Elaboration { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elaboration_message_names_kind() {
        let err = HdlError::elaboration(
            ElaborationErrorKind::UnknownGenericParam,
            "Bad",
            "width of port 'A' refers to undeclared parameter 'X'",
        );
        assert_eq!(err.category(), "ElaborationError");
        assert_eq!(
            err.elaboration_kind(),
            Some(ElaborationErrorKind::UnknownGenericParam)
        );
        assert!(err.to_string().contains("UnknownGenericParam"));
        assert!(err.to_string().contains("'Bad'"));
    }

    #[test]
    fn test_syntax_message_has_position() {
        let err = HdlError::syntax("'}'", "end of input", 3, 7);
        assert_eq!(
            err.to_string(),
            "Syntax error at line 3, column 7: expected '}', found end of input"
        );
        assert_eq!(err.elaboration_kind(), None);
    }
}
