//! Pretty printer for formulas
//!
//! Converts a formula tree back to text in prefix, infix or postfix notation.
//! Used for:
//! - Roundtrip testing (parse -> tree -> infix -> parse)
//! - The canonical `Display` form of [`Formula`]
//! - Branch and error reporting

use crate::formula::Formula;
use crate::symbol::SymbolKind;
use std::fmt;
use std::str::FromStr;

/// Output notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `∧ A B`, `¬A`
    #[default]
    Prefix,
    /// `(A ∧ B)`, `(¬A)`; every application is parenthesized
    Infix,
    /// `A B ∧`, `A¬`
    Postfix,
}

impl Notation {
    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Prefix => "prefix",
            Notation::Infix => "infix",
            Notation::Postfix => "postfix",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized notation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notation {0:?}, expected prefix, infix or postfix")]
pub struct UnknownNotation(pub String);

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(Notation::Prefix),
            "infix" => Ok(Notation::Infix),
            "postfix" => Ok(Notation::Postfix),
            other => Err(UnknownNotation(other.to_string())),
        }
    }
}

/// Accumulates the printed form of a formula.
pub struct FormulaPrinter {
    output: String,
    notation: Notation,
}

impl FormulaPrinter {
    pub fn new(notation: Notation) -> Self {
        Self {
            output: String::new(),
            notation,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub fn print(&mut self, formula: &Formula) {
        match formula {
            Formula::Atom(name) => self.output.push(*name),
            Formula::Not(inner) => self.print_negation(inner),
            Formula::And(l, r) => self.print_binary(SymbolKind::Conjunction, l, r),
            Formula::Or(l, r) => self.print_binary(SymbolKind::Disjunction, l, r),
            Formula::Implies(l, r) => self.print_binary(SymbolKind::Implication, l, r),
        }
    }

    fn print_negation(&mut self, inner: &Formula) {
        let op = SymbolKind::Negation.default_spelling();
        match self.notation {
            Notation::Prefix => {
                self.write(op);
                self.print(inner);
            }
            Notation::Infix => {
                self.write("(");
                self.write(op);
                self.print(inner);
                self.write(")");
            }
            Notation::Postfix => {
                self.print(inner);
                self.write(op);
            }
        }
    }

    fn print_binary(&mut self, kind: SymbolKind, left: &Formula, right: &Formula) {
        let op = kind.default_spelling();
        match self.notation {
            Notation::Prefix => {
                self.write(op);
                self.write(" ");
                self.print(left);
                self.write(" ");
                self.print(right);
            }
            Notation::Infix => {
                self.write("(");
                self.print(left);
                self.write(" ");
                self.write(op);
                self.write(" ");
                self.print(right);
                self.write(")");
            }
            Notation::Postfix => {
                self.print(left);
                self.write(" ");
                self.print(right);
                self.write(" ");
                self.write(op);
            }
        }
    }
}

/// Render `formula` in the given notation.
pub fn stringify(formula: &Formula, notation: Notation) -> String {
    let mut printer = FormulaPrinter::new(notation);
    printer.print(formula);
    printer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Formula {
        // (A → B) ∧ ¬C
        Formula::and(
            Formula::implies(Formula::atom('A'), Formula::atom('B')),
            Formula::not(Formula::atom('C')),
        )
    }

    #[test]
    fn test_prefix() {
        assert_eq!(stringify(&sample(), Notation::Prefix), "∧ → A B ¬C");
    }

    #[test]
    fn test_infix_parenthesizes_everything() {
        assert_eq!(stringify(&sample(), Notation::Infix), "((A → B) ∧ (¬C))");
        assert_eq!(stringify(&Formula::atom('x'), Notation::Infix), "x");
    }

    #[test]
    fn test_postfix() {
        assert_eq!(stringify(&sample(), Notation::Postfix), "A B → C¬ ∧");
    }

    #[test]
    fn test_nested_negation() {
        let f = Formula::not(Formula::not(Formula::atom('p')));
        assert_eq!(stringify(&f, Notation::Prefix), "¬¬p");
        assert_eq!(stringify(&f, Notation::Infix), "(¬(¬p))");
        assert_eq!(stringify(&f, Notation::Postfix), "p¬¬");
    }

    #[test]
    fn test_notation_from_str() {
        assert_eq!("infix".parse::<Notation>(), Ok(Notation::Infix));
        assert_eq!("postfix".parse::<Notation>(), Ok(Notation::Postfix));
        assert!("polish".parse::<Notation>().is_err());
        assert_eq!(Notation::default().to_string(), "prefix");
    }
}
