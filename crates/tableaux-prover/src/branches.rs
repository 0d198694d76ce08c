//! Branch enumeration.
//!
//! Runs the same traversal as the prover with closure detection off, so
//! every path is expanded to its end and reported with its full literal
//! set. Closed paths are reported too; [`Branch::is_closed`] tells them
//! apart. This is the shape a SAT encoder consumes: one clause set per
//! branch.

use crate::tableau::{LeafStatus, PathVisitor};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::ops::ControlFlow;
use tableaux_core::Formula;

/// The literals asserted along one root-to-leaf path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Branch {
    literals: BTreeSet<Formula>,
}

impl Branch {
    pub fn new(literals: impl IntoIterator<Item = Formula>) -> Self {
        Branch {
            literals: literals.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> &BTreeSet<Formula> {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Formula) -> bool {
        self.literals.contains(literal)
    }

    /// True if some atom appears both plain and negated.
    pub fn is_closed(&self) -> bool {
        self.literals
            .iter()
            .filter_map(Formula::complement)
            .any(|complement| self.literals.contains(&complement))
    }

    /// Atoms that appear both plain and negated, in order.
    pub fn complementary_atoms(&self) -> Vec<char> {
        self.literals
            .iter()
            .filter_map(|literal| match literal {
                Formula::Atom(name) if self.literals.contains(&literal.negate()) => Some(*name),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{literal}")?;
        }
        f.write_str("}")
    }
}

/// Every branch of the tableaux for a formula and for its negation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauBranches {
    /// Branches of the tableau seeded with the formula
    pub formula: Vec<Branch>,
    /// Branches of the tableau seeded with its negation
    pub negation: Vec<Branch>,
}

impl TableauBranches {
    /// Closure of each tableau: `(formula closes, negation closes)`.
    pub fn closes(&self) -> (bool, bool) {
        (all_closed(&self.formula), all_closed(&self.negation))
    }
}

fn all_closed(branches: &[Branch]) -> bool {
    branches.iter().all(Branch::is_closed)
}

/// Visitor collecting one [`Branch`] per leaf.
#[derive(Debug, Default)]
pub(crate) struct BranchCollector {
    pub(crate) branches: Vec<Branch>,
}

impl PathVisitor for BranchCollector {
    fn detects_closure(&self) -> bool {
        false
    }

    fn leaf(&mut self, _status: LeafStatus, literals: &HashSet<Formula>) -> ControlFlow<()> {
        self.branches.push(Branch::new(literals.iter().cloned()));
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableaux_core::parse;

    fn branch(srcs: &[&str]) -> Branch {
        Branch::new(srcs.iter().map(|s| parse(s).unwrap()))
    }

    #[test]
    fn test_open_branch() {
        let b = branch(&["A", "~B"]);
        assert!(!b.is_closed());
        assert!(b.complementary_atoms().is_empty());
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_closed_branch() {
        let b = branch(&["A", "~A", "B", "~C", "C"]);
        assert!(b.is_closed());
        assert_eq!(b.complementary_atoms(), vec!['A', 'C']);
    }

    #[test]
    fn test_empty_branch_is_open() {
        assert!(!Branch::default().is_closed());
        assert!(Branch::default().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(branch(&["A", "~B"]).to_string(), "{A, ¬B}");
    }

    #[test]
    fn test_closes_requires_every_branch() {
        let tb = TableauBranches {
            formula: vec![branch(&["A", "~A"]), branch(&["B"])],
            negation: vec![branch(&["B", "~B"])],
        };
        assert_eq!(tb.closes(), (false, true));
    }
}
