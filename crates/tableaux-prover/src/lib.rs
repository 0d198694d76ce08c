//! tableaux-prover - Analytic tableau classifier for propositional logic
//!
//! Decides whether a formula is a tautology, a contradiction or a
//! contingency by building the semantic tableaux of the formula and of its
//! negation, and enumerates every branch of both tableaux for consumers that
//! encode them further (for example as SAT clause sets).
//!
//! The search is depth first over an explicit work stack, so deep formulas
//! do not exhaust the native stack. The number of branches can grow as
//! `2^k` in the number of branching connectives; [`ProverConfig`] carries an
//! optional expansion budget for untrusted input.
//!
//! # Example
//!
//! ```
//! use tableaux_prover::{classify, Classification};
//!
//! assert_eq!(classify("((A -> B) & A) -> B"), Classification::Tautology);
//! assert_eq!(classify("A & ~A"), Classification::Contradiction);
//! assert_eq!(classify("A & B"), Classification::Contingency);
//! assert_eq!(classify("A &"), Classification::InvalidFormula);
//! ```

pub mod branches;
pub mod error;
pub mod prover;
pub mod rules;
pub mod tableau;

pub use branches::{Branch, TableauBranches};
pub use error::{TableauError, TableauResult};
pub use prover::{
    branches, classify, Classification, Prover, ProverConfig, ProverStats, Verdict,
};
pub use rules::{Expansion, FormulaClass, Rule, RulePattern};
pub use tableau::{LeafStatus, PathVisitor, Tableau, WalkStats};
