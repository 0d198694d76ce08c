//! Parse / print roundtrip tests
//!
//! Hand-written cases from the classic tautology list, plus randomized trees
//! generated with proptest.

use proptest::prelude::*;
use tableaux_core::{parse, stringify, Formula, Notation, ParseError};

// ============================================================================
// Helper functions
// ============================================================================

fn reparse(formula: &Formula) -> Result<Formula, ParseError> {
    parse(&stringify(formula, Notation::Infix))
}

fn formula_strategy() -> impl Strategy<Value = Formula> {
    let leaf = prop::sample::select(vec!['A', 'B', 'C', 'p', 'q', 'Z']).prop_map(Formula::atom);
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::or(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Formula::implies(l, r)),
        ]
    })
}

// ============================================================================
// Fixed cases
// ============================================================================

#[test]
fn roundtrip_classic_formulas() {
    let sources = [
        "A|~A",
        "A&~A",
        "A&B",
        "A->B",
        "((A->B)&A)->B",
        "((A->B)&~B)->~A",
        "(A->~~A)&((~~A)->A)",
        "((A->B)&(B->C))->(A->C)",
        "(A->(B->A))",
        "(A->B) -> ((~B) -> (~A))",
        "((~(A&B))->((~A)|(~B))) & (((~A)|(~B))->(~(A&B)))",
        "a & b | c",
    ];
    for source in sources {
        let tree = parse(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
        assert_eq!(reparse(&tree), Ok(tree.clone()), "source {source:?}");
    }
}

#[test]
fn infix_output_of_modus_ponens() {
    let tree = parse("((A->B)&A)->B").unwrap();
    assert_eq!(stringify(&tree, Notation::Infix), "(((A → B) ∧ A) → B)");
    assert_eq!(stringify(&tree, Notation::Prefix), "→ ∧ → A B A B");
    assert_eq!(stringify(&tree, Notation::Postfix), "A B → A ∧ B →");
}

#[test]
fn rejects_malformed_input() {
    for source in ["(A&B", "A&&B", "A)", "&", "A B", "", "A & 1", "(A]"] {
        assert!(parse(source).is_err(), "accepted {source:?}");
    }
}

#[test]
fn error_messages_name_the_problem() {
    let err = parse("(A&B").unwrap_err();
    assert_eq!(err.to_string(), "unclosed '(' at position 0");
    assert_eq!(err.position(), Some(0));

    let err = parse("A&&B").unwrap_err();
    assert_eq!(
        err.to_string(),
        "conjunction at position 1 needs 2 operand(s), found 1"
    );
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_infix_roundtrip(f in formula_strategy()) {
        prop_assert_eq!(reparse(&f), Ok(f));
    }

    #[test]
    fn prop_display_is_injective(f in formula_strategy(), g in formula_strategy()) {
        // the prefix form stands in for structural equality
        prop_assert_eq!(f.to_string() == g.to_string(), f == g);
    }

    #[test]
    fn prop_parser_never_panics(s in "[A-Ca-c~&|()>\\- \\[\\]{}]{0,24}") {
        let _ = parse(&s);
    }
}
