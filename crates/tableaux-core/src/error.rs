//! Error types for formula construction and parsing

use crate::symbol::SymbolKind;
use thiserror::Error;

/// Result type alias for parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Contract violations when building a formula node from its parts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Wrong number of operands for a connective
    #[error("{kind} takes {expected} operand(s), got {found}")]
    Arity {
        kind: SymbolKind,
        expected: usize,
        found: usize,
    },

    /// Proposition identifiers are single ASCII letters
    #[error("{0:?} is not a proposition letter")]
    InvalidIdentifier(char),

    /// Brackets and sentinels never label a formula node
    #[error("{0} cannot label a formula node")]
    NotAConnective(SymbolKind),
}

/// Errors that can occur while parsing infix text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token accepts the input here
    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// A closing bracket with no opening bracket before it
    #[error("unmatched '{close}' at position {position}")]
    UnmatchedClose { close: char, position: usize },

    /// A closing bracket of a different style than the one it closes
    #[error("'{close}' at position {position} does not close '{open}'")]
    MismatchedBracket {
        open: char,
        close: char,
        position: usize,
    },

    /// An opening bracket that is never closed
    #[error("unclosed '{open}' at position {position}")]
    UnclosedOpen { open: char, position: usize },

    /// An operator found fewer operands than it needs
    #[error("{operator} at position {position} needs {needed} operand(s), found {found}")]
    OperandUnderflow {
        operator: SymbolKind,
        needed: usize,
        found: usize,
        position: usize,
    },

    /// The input did not reduce to exactly one formula (0 means empty input)
    #[error("expected one formula, found {0}")]
    Leftover(usize),

    /// Node construction failed
    #[error(transparent)]
    Malformed(#[from] FormulaError),
}

impl ParseError {
    /// Byte offset the error points at, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnmatchedClose { position, .. }
            | ParseError::MismatchedBracket { position, .. }
            | ParseError::UnclosedOpen { position, .. }
            | ParseError::OperandUnderflow { position, .. } => Some(*position),
            ParseError::Leftover(_) | ParseError::Malformed(_) => None,
        }
    }
}

impl From<crate::lexer::LexerError> for ParseError {
    fn from(err: crate::lexer::LexerError) -> Self {
        ParseError::UnexpectedCharacter {
            found: err.found,
            position: err.position,
        }
    }
}
