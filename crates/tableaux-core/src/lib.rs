//! tableaux-core - Propositional formulas and their concrete syntax
//!
//! This crate provides:
//! - The symbol catalog: connectives, brackets, propositions and every
//!   spelling the parser accepts for them
//! - The [`Formula`] tree, immutable and structurally compared
//! - An infix parser with no operator precedence (brackets group)
//! - A printer for prefix, infix and postfix notation
//!
//! # Example
//!
//! ```
//! use tableaux_core::{parse, stringify, Formula, Notation};
//!
//! let f = parse("(A -> B) & A").unwrap();
//! assert_eq!(
//!     f,
//!     Formula::and(
//!         Formula::implies(Formula::atom('A'), Formula::atom('B')),
//!         Formula::atom('A'),
//!     )
//! );
//! assert_eq!(stringify(&f, Notation::Infix), "((A → B) ∧ A)");
//! ```

pub mod error;
pub mod formula;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod symbol;

pub use error::{FormulaError, ParseError, ParseResult};
pub use formula::Formula;
pub use lexer::{tokenize, LexerError, Spanned, Token};
pub use parser::{from_postfix, parse, to_postfix};
pub use pretty::{stringify, FormulaPrinter, Notation, UnknownNotation};
pub use symbol::{closing_bracket, opening_bracket, SymbolKind};
