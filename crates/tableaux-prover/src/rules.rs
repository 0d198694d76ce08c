//! Tableau expansion rules.
//!
//! Seven rules cover every compound propositional formula. Four are alpha
//! rules (non-branching, one successor set) and three are beta rules
//! (branching, two alternatives):
//!
//! | rule | pattern | successors |
//! |---|---|---|
//! | α ¬¬ | `(¬, ¬)` | `φ` |
//! | α ∧ | `(∧, *)` | `φ, ψ` |
//! | α ¬∨ | `(¬, ∨)` | `¬φ, ¬ψ` |
//! | α ¬→ | `(¬, →)` | `φ, ¬ψ` |
//! | β ¬∧ | `(¬, ∧)` | `¬φ` \| `¬ψ` |
//! | β ∨ | `(∨, *)` | `φ` \| `ψ` |
//! | β → | `(→, *)` | `¬φ` \| `ψ` |
//!
//! A pattern is the pair (outer connective, kind of its first child), with
//! `*` the wildcard.

use crate::error::{TableauError, TableauResult};
use std::fmt;
use tableaux_core::{Formula, SymbolKind};

/// Lookup key of a rule: outer connective and the kind of its first child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RulePattern {
    pub outer: SymbolKind,
    pub first: SymbolKind,
}

impl RulePattern {
    pub const fn new(outer: SymbolKind, first: SymbolKind) -> Self {
        RulePattern { outer, first }
    }

    /// Pattern of a compound formula; `None` for atoms.
    pub fn of(formula: &Formula) -> Option<Self> {
        formula
            .first_child()
            .map(|child| RulePattern::new(formula.kind(), child.kind()))
    }

    /// Wildcard-aware match of a catalog pattern against a concrete one.
    pub fn matches(&self, other: &RulePattern) -> bool {
        self.outer.matches(other.outer) && self.first.matches(other.first)
    }
}

impl fmt::Display for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |kind: SymbolKind| match kind {
            SymbolKind::Wildcard => "*",
            other => other.default_spelling(),
        };
        write!(f, "({}, {})", show(self.outer), show(self.first))
    }
}

/// The seven propositional tableau rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// α: ¬¬φ ⊢ φ
    DoubleNegation,
    /// α: φ ∧ ψ ⊢ φ, ψ
    Conjunction,
    /// α: ¬(φ ∨ ψ) ⊢ ¬φ, ¬ψ
    NegatedDisjunction,
    /// α: ¬(φ → ψ) ⊢ φ, ¬ψ
    NegatedImplication,
    /// β: ¬(φ ∧ ψ) ⊢ ¬φ | ¬ψ
    NegatedConjunction,
    /// β: φ ∨ ψ ⊢ φ | ψ
    Disjunction,
    /// β: φ → ψ ⊢ ¬φ | ψ
    Implication,
}

/// Successors produced by applying a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Non-branching: all formulas join the current path
    Alpha(Vec<Formula>),
    /// Branching: the path splits, one alternative each
    Beta(Formula, Formula),
}

/// How the engine treats a formula taken off the new-formula stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaClass {
    /// Atom or negated atom, recorded on the path
    Literal,
    /// Compound, expands without branching
    Alpha(Rule),
    /// Compound, expands into two alternatives
    Beta(Rule),
}

impl Rule {
    /// Every rule, non-branching first.
    pub const ALL: [Rule; 7] = [
        Rule::DoubleNegation,
        Rule::Conjunction,
        Rule::NegatedDisjunction,
        Rule::NegatedImplication,
        Rule::NegatedConjunction,
        Rule::Disjunction,
        Rule::Implication,
    ];

    pub fn pattern(self) -> RulePattern {
        use SymbolKind::*;
        match self {
            Rule::DoubleNegation => RulePattern::new(Negation, Negation),
            Rule::Conjunction => RulePattern::new(Conjunction, Wildcard),
            Rule::NegatedDisjunction => RulePattern::new(Negation, Disjunction),
            Rule::NegatedImplication => RulePattern::new(Negation, Implication),
            Rule::NegatedConjunction => RulePattern::new(Negation, Conjunction),
            Rule::Disjunction => RulePattern::new(Disjunction, Wildcard),
            Rule::Implication => RulePattern::new(Implication, Wildcard),
        }
    }

    pub fn is_branching(self) -> bool {
        matches!(
            self,
            Rule::NegatedConjunction | Rule::Disjunction | Rule::Implication
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::DoubleNegation => "¬¬",
            Rule::Conjunction => "∧",
            Rule::NegatedDisjunction => "¬∨",
            Rule::NegatedImplication => "¬→",
            Rule::NegatedConjunction => "¬∧",
            Rule::Disjunction => "∨",
            Rule::Implication => "→",
        }
    }

    /// Catalog lookup by pattern, honouring wildcards.
    pub fn lookup(pattern: RulePattern) -> Option<Rule> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.pattern().matches(&pattern))
    }

    /// The rule that expands `formula`, or `None` for literals.
    pub fn for_formula(formula: &Formula) -> Option<Rule> {
        match formula {
            Formula::Atom(_) => None,
            Formula::Not(inner) => match &**inner {
                Formula::Atom(_) => None,
                Formula::Not(_) => Some(Rule::DoubleNegation),
                Formula::Or(_, _) => Some(Rule::NegatedDisjunction),
                Formula::Implies(_, _) => Some(Rule::NegatedImplication),
                Formula::And(_, _) => Some(Rule::NegatedConjunction),
            },
            Formula::And(_, _) => Some(Rule::Conjunction),
            Formula::Or(_, _) => Some(Rule::Disjunction),
            Formula::Implies(_, _) => Some(Rule::Implication),
        }
    }

    /// Apply this rule to `formula`; `None` if the formula has another shape.
    pub fn apply(self, formula: &Formula) -> Option<Expansion> {
        match (self, formula) {
            (Rule::Conjunction, Formula::And(a, b)) => {
                Some(Expansion::Alpha(vec![(**a).clone(), (**b).clone()]))
            }
            (Rule::Disjunction, Formula::Or(a, b)) => {
                Some(Expansion::Beta((**a).clone(), (**b).clone()))
            }
            (Rule::Implication, Formula::Implies(a, b)) => {
                Some(Expansion::Beta(a.negate(), (**b).clone()))
            }
            (_, Formula::Not(inner)) => match (self, &**inner) {
                (Rule::DoubleNegation, Formula::Not(a)) => {
                    Some(Expansion::Alpha(vec![(**a).clone()]))
                }
                (Rule::NegatedDisjunction, Formula::Or(a, b)) => {
                    Some(Expansion::Alpha(vec![a.negate(), b.negate()]))
                }
                (Rule::NegatedImplication, Formula::Implies(a, b)) => {
                    Some(Expansion::Alpha(vec![(**a).clone(), b.negate()]))
                }
                (Rule::NegatedConjunction, Formula::And(a, b)) => {
                    Some(Expansion::Beta(a.negate(), b.negate()))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a formula for the engine.
pub fn classify(formula: &Formula) -> TableauResult<FormulaClass> {
    if formula.is_literal() {
        return Ok(FormulaClass::Literal);
    }
    match Rule::for_formula(formula) {
        Some(rule) if rule.is_branching() => Ok(FormulaClass::Beta(rule)),
        Some(rule) => Ok(FormulaClass::Alpha(rule)),
        None => Err(TableauError::unmatched(formula)),
    }
}

/// Find and apply the rule for a compound formula.
pub fn expand(formula: &Formula) -> TableauResult<(Rule, Expansion)> {
    Rule::for_formula(formula)
        .and_then(|rule| rule.apply(formula).map(|expansion| (rule, expansion)))
        .ok_or_else(|| TableauError::unmatched(formula))
}
