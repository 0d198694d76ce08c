//! Propositional formula trees.
//!
//! A [`Formula`] is immutable once built. Subformulas sit behind [`Arc`] so a
//! rule application can hand the same child to several tableau branches
//! without copying it. Equality, hashing and ordering are structural.

use crate::error::FormulaError;
use crate::pretty::{stringify, Notation};
use crate::symbol::SymbolKind;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    /// Atomic proposition, named by a single ASCII letter
    Atom(char),
    /// Negation
    Not(Arc<Formula>),
    /// Conjunction
    And(Arc<Formula>, Arc<Formula>),
    /// Disjunction
    Or(Arc<Formula>, Arc<Formula>),
    /// Implication (left is the antecedent)
    Implies(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    /// Atomic proposition.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII letter; use [`Formula::try_atom`] for
    /// untrusted input.
    pub fn atom(name: char) -> Self {
        assert!(
            name.is_ascii_alphabetic(),
            "proposition name must be an ASCII letter, got {name:?}"
        );
        Formula::Atom(name)
    }

    pub fn try_atom(name: char) -> Result<Self, FormulaError> {
        if name.is_ascii_alphabetic() {
            Ok(Formula::Atom(name))
        } else {
            Err(FormulaError::InvalidIdentifier(name))
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Formula) -> Self {
        Formula::Not(Arc::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Arc::new(left), Arc::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Arc::new(left), Arc::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Arc::new(left), Arc::new(right))
    }

    /// Build a connective node from its kind and operands, checking arity.
    ///
    /// Operands are taken in order: the first becomes the left child.
    pub fn connective(kind: SymbolKind, operands: Vec<Formula>) -> Result<Self, FormulaError> {
        let expected = match kind {
            SymbolKind::Negation => 1,
            SymbolKind::Conjunction | SymbolKind::Disjunction | SymbolKind::Implication => 2,
            other => return Err(FormulaError::NotAConnective(other)),
        };
        let found = operands.len();
        let mut operands = operands.into_iter();
        match (kind, operands.next(), operands.next(), operands.next()) {
            (SymbolKind::Negation, Some(inner), None, None) => Ok(Formula::not(inner)),
            (SymbolKind::Conjunction, Some(l), Some(r), None) => Ok(Formula::and(l, r)),
            (SymbolKind::Disjunction, Some(l), Some(r), None) => Ok(Formula::or(l, r)),
            (SymbolKind::Implication, Some(l), Some(r), None) => Ok(Formula::implies(l, r)),
            _ => Err(FormulaError::Arity {
                kind,
                expected,
                found,
            }),
        }
    }

    /// The symbol kind labelling this node.
    pub fn kind(&self) -> SymbolKind {
        match self {
            Formula::Atom(_) => SymbolKind::Proposition,
            Formula::Not(_) => SymbolKind::Negation,
            Formula::And(_, _) => SymbolKind::Conjunction,
            Formula::Or(_, _) => SymbolKind::Disjunction,
            Formula::Implies(_, _) => SymbolKind::Implication,
        }
    }

    /// First (or only) child, `None` for atoms.
    pub fn first_child(&self) -> Option<&Formula> {
        match self {
            Formula::Atom(_) => None,
            Formula::Not(inner) => Some(inner),
            Formula::And(left, _) | Formula::Or(left, _) | Formula::Implies(left, _) => Some(left),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    /// A literal is an atom or the negation of an atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Not(inner) => inner.is_atom(),
            _ => false,
        }
    }

    /// The opposite literal: `P` <-> `¬P`. `None` if this is not a literal.
    pub fn complement(&self) -> Option<Formula> {
        match self {
            Formula::Atom(_) => Some(Formula::Not(Arc::new(self.clone()))),
            Formula::Not(inner) if inner.is_atom() => Some((**inner).clone()),
            _ => None,
        }
    }

    /// Wrap this formula in a negation.
    pub fn negate(&self) -> Formula {
        Formula::Not(Arc::new(self.clone()))
    }

    /// Proposition letters occurring in this formula, sorted.
    pub fn atoms(&self) -> BTreeSet<char> {
        let mut atoms = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(formula) = stack.pop() {
            match formula {
                Formula::Atom(name) => {
                    atoms.insert(*name);
                }
                Formula::Not(inner) => stack.push(inner),
                Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) => {
                    stack.push(l);
                    stack.push(r);
                }
            }
        }
        atoms
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Not(inner) => 1 + inner.size(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) => {
                1 + l.size() + r.size()
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Not(inner) => 1 + inner.depth(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    /// Truth value under `valuation`, which maps each proposition letter to a
    /// boolean.
    pub fn evaluate<F>(&self, valuation: &F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self {
            Formula::Atom(name) => valuation(*name),
            Formula::Not(inner) => !inner.evaluate(valuation),
            Formula::And(l, r) => l.evaluate(valuation) && r.evaluate(valuation),
            Formula::Or(l, r) => l.evaluate(valuation) || r.evaluate(valuation),
            Formula::Implies(l, r) => !l.evaluate(valuation) || r.evaluate(valuation),
        }
    }
}

/// Canonical prefix notation, e.g. `→ ∧ A B ¬C`.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self, Notation::Prefix))
    }
}
