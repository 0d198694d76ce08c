//! Tableau classifier.
//!
//! A formula is classified by building two tableaux, one seeded with the
//! formula and one with its negation, and asking whether each closes:
//!
//! | formula closes | negation closes | result |
//! |---|---|---|
//! | no | no | contingency |
//! | no | yes | tautology |
//! | yes | no | contradiction |
//! | yes | yes | tableaux error |

use crate::branches::{BranchCollector, TableauBranches};
use crate::error::{TableauError, TableauResult};
use crate::tableau::{LeafStatus, PathVisitor, Tableau, WalkStats};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::ControlFlow;
use tableaux_core::{parse, Formula};
use tracing::{debug, warn};

/// Configuration for the prover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Maximum expansion steps per tableau; `None` searches exhaustively.
    pub max_expansions: Option<usize>,
    /// Stop a closure check at the first open leaf.
    pub short_circuit: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_expansions: None,
            short_circuit: true,
        }
    }
}

/// Outcome of classifying one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// True under every valuation
    Tautology,
    /// False under every valuation
    Contradiction,
    /// True under some valuations and false under others
    Contingency,
    /// The input did not parse
    InvalidFormula,
    /// The engine failed or reported both tableaux closed
    TableauxError,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Tautology => "tautology",
            Classification::Contradiction => "contradiction",
            Classification::Contingency => "contingency",
            Classification::InvalidFormula => "invalid formula",
            Classification::TableauxError => "tableaux error",
        }
    }

    /// True for the three semantic outcomes.
    pub fn is_semantic(self) -> bool {
        matches!(
            self,
            Classification::Tautology | Classification::Contradiction | Classification::Contingency
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two closure facts a classification is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// The tableau seeded with the formula closes
    pub formula_closes: bool,
    /// The tableau seeded with the negation closes
    pub negation_closes: bool,
}

impl Verdict {
    pub fn classification(self) -> Classification {
        match (self.formula_closes, self.negation_closes) {
            (false, false) => Classification::Contingency,
            (false, true) => Classification::Tautology,
            (true, false) => Classification::Contradiction,
            (true, true) => Classification::TableauxError,
        }
    }
}

/// Counters accumulated over a prover's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProverStats {
    /// Tableau traversals run
    pub traversals: usize,
    /// Expansion steps over all traversals
    pub expansions: usize,
    /// Leaves reached over all traversals
    pub leaves: usize,
    /// Largest work stack in any traversal
    pub peak_work: usize,
}

impl ProverStats {
    fn record(&mut self, walk: WalkStats) {
        self.traversals += 1;
        self.expansions += walk.expansions;
        self.leaves += walk.leaves;
        self.peak_work = self.peak_work.max(walk.peak_work);
    }
}

/// Visitor answering "does every leaf close?".
struct ClosureCheck {
    short_circuit: bool,
    open_found: bool,
}

impl PathVisitor for ClosureCheck {
    fn detects_closure(&self) -> bool {
        true
    }

    fn leaf(&mut self, status: LeafStatus, _literals: &HashSet<Formula>) -> ControlFlow<()> {
        if status == LeafStatus::Open {
            self.open_found = true;
            if self.short_circuit {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// The tableau prover.
#[derive(Clone, Debug, Default)]
pub struct Prover {
    config: ProverConfig,
    stats: ProverStats,
}

impl Prover {
    /// Create a prover with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProverConfig) -> Self {
        Prover {
            config,
            stats: ProverStats::default(),
        }
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    pub fn stats(&self) -> &ProverStats {
        &self.stats
    }

    /// Whether every path of the tableau seeded with `formula` closes.
    pub fn closes(&mut self, formula: &Formula) -> TableauResult<bool> {
        let mut check = ClosureCheck {
            short_circuit: self.config.short_circuit,
            open_found: false,
        };
        self.walk(formula, &mut check)?;
        Ok(!check.open_found)
    }

    /// Closure of the tableaux for `formula` and for its negation.
    pub fn verdict(&mut self, formula: &Formula) -> TableauResult<Verdict> {
        let verdict = Verdict {
            formula_closes: self.closes(formula)?,
            negation_closes: self.closes(&formula.negate())?,
        };
        debug!(
            %formula,
            formula_closes = verdict.formula_closes,
            negation_closes = verdict.negation_closes,
            "verdict"
        );
        Ok(verdict)
    }

    /// Classify a formula, reporting engine failures as errors.
    pub fn try_classify(&mut self, formula: &Formula) -> TableauResult<Classification> {
        match self.verdict(formula)?.classification() {
            Classification::TableauxError => Err(TableauError::inconsistent(formula)),
            classification => {
                debug!(%formula, %classification, "classified");
                Ok(classification)
            }
        }
    }

    /// Classify a formula. Engine failures become
    /// [`Classification::TableauxError`].
    pub fn classify(&mut self, formula: &Formula) -> Classification {
        self.try_classify(formula).unwrap_or_else(|err| {
            warn!(%formula, error = %err, "tableau search failed");
            Classification::TableauxError
        })
    }

    /// Parse and classify. Parse failures become
    /// [`Classification::InvalidFormula`].
    pub fn classify_str(&mut self, text: &str) -> Classification {
        match parse(text) {
            Ok(formula) => self.classify(&formula),
            Err(err) => {
                debug!(input = text, error = %err, "invalid formula");
                Classification::InvalidFormula
            }
        }
    }

    /// Every branch of the tableaux for `formula` and for its negation.
    pub fn branches(&mut self, formula: &Formula) -> TableauResult<TableauBranches> {
        let mut positive = BranchCollector::default();
        self.walk(formula, &mut positive)?;
        let mut negative = BranchCollector::default();
        self.walk(&formula.negate(), &mut negative)?;
        Ok(TableauBranches {
            formula: positive.branches,
            negation: negative.branches,
        })
    }

    fn walk<V: PathVisitor>(&mut self, seed: &Formula, visitor: &mut V) -> TableauResult<()> {
        let mut tableau = Tableau::new(seed.clone());
        match tableau.walk(visitor, self.config.max_expansions) {
            Ok(walk) => {
                debug!(
                    %seed,
                    expansions = walk.expansions,
                    leaves = walk.leaves,
                    "traversal finished"
                );
                self.stats.record(walk);
                Ok(())
            }
            Err(err) => {
                warn!(%seed, error = %err, "traversal aborted");
                self.stats.traversals += 1;
                Err(err)
            }
        }
    }
}

/// Parse and classify `text` with the default configuration.
pub fn classify(text: &str) -> Classification {
    Prover::new().classify_str(text)
}

/// Enumerate the branches of both tableaux for `formula`, exhaustively.
pub fn branches(formula: &Formula) -> TableauResult<TableauBranches> {
    Prover::new().branches(formula)
}
