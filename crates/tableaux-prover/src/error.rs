//! Error types for tableau search

use tableaux_core::Formula;
use thiserror::Error;

/// Result type for tableau operations
pub type TableauResult<T> = Result<T, TableauError>;

/// Internal failures of the tableau engine.
///
/// None of these occur for formulas built from the five supported
/// constructs under an unbounded search; they exist so a batch caller gets
/// a value to report instead of a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableauError {
    /// A compound formula whose shape has no expansion rule
    #[error("no expansion rule matches {formula}")]
    UnmatchedPattern { formula: Formula },

    /// Both the formula and its negation have closed tableaux
    #[error("tableaux for both {formula} and its negation close")]
    Inconsistent { formula: Formula },

    /// The configured expansion budget ran out
    #[error("search exceeded {limit} expansions")]
    LimitExceeded { limit: usize },
}

impl TableauError {
    pub fn unmatched(formula: &Formula) -> Self {
        TableauError::UnmatchedPattern {
            formula: formula.clone(),
        }
    }

    pub fn inconsistent(formula: &Formula) -> Self {
        TableauError::Inconsistent {
            formula: formula.clone(),
        }
    }
}
