//! Parse error types for message patterns.

use thiserror::Error;

/// An error that occurred while parsing a message template.
///
/// Parsing aborts at the first error; no partial AST is produced. Errors are
/// cloneable so a compiled-pattern cache can retain them as terminal
/// failures for a known-bad template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with the offending position.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Byte offset of the error within the template.
        offset: usize,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
        /// Human-readable reason.
        message: String,
    },
}

impl ParseError {
    /// Byte offset of the error within the template.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Syntax { offset, .. } => *offset,
        }
    }

    /// Human-readable reason, without position.
    pub fn message(&self) -> &str {
        match self {
            ParseError::Syntax { message, .. } => message,
        }
    }
}
