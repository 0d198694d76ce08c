//! Tableau search state and the depth-first walker.
//!
//! A [`Tableau`] holds exactly one path of the (never fully built) tableau
//! tree. The walker explores every path depth first with an explicit work
//! stack. Each mutation of the state schedules its inverse on the same stack
//! before any deeper work, so leaving a subtree replays the inverses in
//! reverse order and the state is back to what it was on entry. This holds
//! on every exit: closed leaf, open leaf, early stop by the visitor, rule
//! error, or budget exhaustion.
//!
//! The number of leaves is at most `2^k` for `k` branching connectives
//! (disjunction, implication, negated conjunction) in the seed, so callers
//! facing untrusted input should set an expansion budget.

use crate::error::{TableauError, TableauResult};
use crate::rules::{self, Expansion, FormulaClass};
use std::collections::HashSet;
use std::ops::ControlFlow;
use tableaux_core::Formula;
use tracing::trace;

/// How a path ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafStatus {
    /// A literal met its complement
    Closed,
    /// Nothing left to expand and no contradiction found
    Open,
}

/// Receives every leaf the walker reaches.
pub trait PathVisitor {
    /// Whether a literal meeting its complement ends the path.
    ///
    /// When false the walker keeps expanding, so every leaf is reported as
    /// [`LeafStatus::Open`] and carries the full literal set of its path.
    fn detects_closure(&self) -> bool;

    /// Called once per leaf with the literals asserted on its path.
    /// Returning `Break` stops the walk (the state is still restored).
    fn leaf(&mut self, status: LeafStatus, literals: &HashSet<Formula>) -> ControlFlow<()>;
}

/// Counters from one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Expansion steps taken
    pub expansions: usize,
    /// Leaves reported to the visitor
    pub leaves: usize,
    /// Largest work stack seen
    pub peak_work: usize,
}

/// Search state for one tableau.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tableau {
    /// Formulas produced but not yet classified (stack)
    new_formulas: Vec<Formula>,
    /// Literals asserted on the current path
    literals: HashSet<Formula>,
    /// Compound formulas waiting for an alpha rule (stack)
    non_branching: Vec<Formula>,
    /// Compound formulas waiting for a beta rule (stack)
    branching: Vec<Formula>,
}

/// Work items. `Expand` and `Explore` do work; the rest undo it.
#[derive(Debug)]
enum Step {
    Expand,
    Explore(Formula),
    RestoreNew(Formula),
    RemoveLiteral(Formula),
    PopNonBranching,
    PopBranching,
    TruncateNew(usize),
    RestoreNonBranching(Formula),
    RestoreBranching(Formula),
}

impl Tableau {
    /// Fresh state seeded with a single formula.
    pub fn new(seed: Formula) -> Self {
        Tableau {
            new_formulas: vec![seed],
            literals: HashSet::new(),
            non_branching: Vec::new(),
            branching: Vec::new(),
        }
    }

    pub fn new_formulas(&self) -> &[Formula] {
        &self.new_formulas
    }

    pub fn literals(&self) -> &HashSet<Formula> {
        &self.literals
    }

    pub fn non_branching(&self) -> &[Formula] {
        &self.non_branching
    }

    pub fn branching(&self) -> &[Formula] {
        &self.branching
    }

    /// Walk every path, reporting leaves to `visitor`.
    ///
    /// `max_expansions` bounds the number of expansion steps; when it runs
    /// out the walk unwinds and returns [`TableauError::LimitExceeded`].
    pub fn walk<V: PathVisitor>(
        &mut self,
        visitor: &mut V,
        max_expansions: Option<usize>,
    ) -> TableauResult<WalkStats> {
        let detect = visitor.detects_closure();
        let mut stats = WalkStats::default();
        let mut work = vec![Step::Expand];
        let mut halt: Option<TableauResult<()>> = None;

        while let Some(step) = work.pop() {
            match step {
                Step::Expand | Step::Explore(_) if halt.is_some() => {}
                Step::Expand => {
                    if let Some(limit) = max_expansions {
                        if stats.expansions >= limit {
                            halt = Some(Err(TableauError::LimitExceeded { limit }));
                            continue;
                        }
                    }
                    stats.expansions += 1;
                    match self.expand(&mut work, detect) {
                        Ok(Some(status)) => {
                            stats.leaves += 1;
                            trace!(?status, literals = self.literals.len(), "leaf");
                            if visitor.leaf(status, &self.literals).is_break() {
                                halt = Some(Ok(()));
                            }
                        }
                        Ok(None) => {}
                        Err(err) => halt = Some(Err(err)),
                    }
                }
                Step::Explore(alternative) => {
                    work.push(Step::TruncateNew(self.new_formulas.len()));
                    self.new_formulas.push(alternative);
                    work.push(Step::Expand);
                }
                undo => self.undo(undo),
            }
            stats.peak_work = stats.peak_work.max(work.len());
        }

        match halt {
            Some(Err(err)) => Err(err),
            _ => Ok(stats),
        }
    }

    /// One state-machine step. Returns the leaf status if this path ended.
    fn expand(&mut self, work: &mut Vec<Step>, detect: bool) -> TableauResult<Option<LeafStatus>> {
        if let Some(formula) = self.new_formulas.pop() {
            work.push(Step::RestoreNew(formula.clone()));
            match rules::classify(&formula)? {
                FormulaClass::Literal => {
                    if detect {
                        if let Some(complement) = formula.complement() {
                            if self.literals.contains(&complement) {
                                return Ok(Some(LeafStatus::Closed));
                            }
                        }
                    }
                    if self.literals.insert(formula.clone()) {
                        work.push(Step::RemoveLiteral(formula));
                    }
                }
                FormulaClass::Alpha(_) => {
                    self.non_branching.push(formula);
                    work.push(Step::PopNonBranching);
                }
                FormulaClass::Beta(_) => {
                    self.branching.push(formula);
                    work.push(Step::PopBranching);
                }
            }
            work.push(Step::Expand);
            return Ok(None);
        }

        if let Some(formula) = self.non_branching.pop() {
            work.push(Step::RestoreNonBranching(formula.clone()));
            let (rule, expansion) = rules::expand(&formula)?;
            let Expansion::Alpha(successors) = expansion else {
                return Err(TableauError::unmatched(&formula));
            };
            trace!(%rule, %formula, "alpha");
            work.push(Step::TruncateNew(self.new_formulas.len()));
            self.new_formulas.extend(successors);
            work.push(Step::Expand);
            return Ok(None);
        }

        if let Some(formula) = self.branching.pop() {
            work.push(Step::RestoreBranching(formula.clone()));
            let (rule, expansion) = rules::expand(&formula)?;
            let Expansion::Beta(left, right) = expansion else {
                return Err(TableauError::unmatched(&formula));
            };
            trace!(%rule, %formula, "beta");
            // right is pushed first so the left alternative runs first
            work.push(Step::Explore(right));
            work.push(Step::Explore(left));
            return Ok(None);
        }

        Ok(Some(LeafStatus::Open))
    }

    fn undo(&mut self, step: Step) {
        match step {
            Step::RestoreNew(formula) => self.new_formulas.push(formula),
            Step::RemoveLiteral(formula) => {
                self.literals.remove(&formula);
            }
            Step::PopNonBranching => {
                self.non_branching.pop();
            }
            Step::PopBranching => {
                self.branching.pop();
            }
            Step::TruncateNew(len) => self.new_formulas.truncate(len),
            Step::RestoreNonBranching(formula) => self.non_branching.push(formula),
            Step::RestoreBranching(formula) => self.branching.push(formula),
            Step::Expand | Step::Explore(_) => {}
        }
    }
}
