//! Infix formula parser
//!
//! Two passes over the token stream:
//!
//! 1. **Infix to postfix.** A shunting-yard pass with no precedence at all:
//!    every connective is pushed onto the operator stack as soon as it is
//!    read, and brackets are the only way to group. Without brackets the
//!    operators apply in the order the stack unwinds, so `A & B | C` reads as
//!    `A ∧ (B ∨ C)` and `~A & B` reads as `¬(A ∧ B)`.
//! 2. **Postfix to tree.** Replay the queue against an operand stack.
//!
//! Failures are reported as [`ParseError`]; the parser never panics.

use crate::error::{ParseError, ParseResult};
use crate::formula::Formula;
use crate::lexer::{tokenize, Spanned, Token};
use crate::symbol::{closing_bracket, SymbolKind};

/// Parse infix text into a formula.
pub fn parse(input: &str) -> ParseResult<Formula> {
    let postfix = to_postfix(input)?;
    from_postfix(&postfix)
}

/// First pass: tokenize `input` and reorder it into postfix.
///
/// Unclosed opening brackets are left in the queue; [`from_postfix`] reports
/// them.
pub fn to_postfix(input: &str) -> ParseResult<Vec<Spanned>> {
    let mut output: Vec<Spanned> = Vec::new();
    let mut operators: Vec<Spanned> = Vec::new();

    for spanned in tokenize(input)? {
        match spanned.token {
            Token::Proposition(_) => output.push(spanned),
            Token::LeftParen(_)
            | Token::Negation
            | Token::Conjunction
            | Token::Disjunction
            | Token::Implication => operators.push(spanned),
            Token::RightParen(close) => {
                let open = loop {
                    match operators.pop() {
                        Some(Spanned {
                            token: Token::LeftParen(open),
                            ..
                        }) => break open,
                        Some(op) => output.push(op),
                        None => {
                            return Err(ParseError::UnmatchedClose {
                                close,
                                position: spanned.span.start,
                            })
                        }
                    }
                };
                if !brackets_pair(open, close) {
                    return Err(ParseError::MismatchedBracket {
                        open,
                        close,
                        position: spanned.span.start,
                    });
                }
            }
        }
    }

    output.extend(operators.into_iter().rev());
    Ok(output)
}

/// Second pass: build the tree from a postfix token queue.
pub fn from_postfix(postfix: &[Spanned]) -> ParseResult<Formula> {
    let mut operands: Vec<Formula> = Vec::new();

    for spanned in postfix {
        let position = spanned.span.start;
        match spanned.token {
            Token::Proposition(name) => operands.push(Formula::try_atom(name)?),
            Token::LeftParen(open) => return Err(ParseError::UnclosedOpen { open, position }),
            Token::RightParen(close) => return Err(ParseError::UnmatchedClose { close, position }),
            token => {
                let operator = token.kind();
                let needed = operator.arity().unwrap_or(0);
                if operands.len() < needed {
                    return Err(ParseError::OperandUnderflow {
                        operator,
                        needed,
                        found: operands.len(),
                        position,
                    });
                }
                // split_off keeps source order: the second popped is the left child
                let args = operands.split_off(operands.len() - needed);
                operands.push(Formula::connective(operator, args)?);
            }
        }
    }

    match operands.len() {
        1 => operands.pop().ok_or(ParseError::Leftover(0)),
        n => Err(ParseError::Leftover(n)),
    }
}

fn brackets_pair(open: char, close: char) -> bool {
    let mut buf = [0u8; 4];
    closing_bracket(open.encode_utf8(&mut buf))
        .and_then(|expected| expected.chars().next())
        .is_some_and(|expected| expected == close)
}

/// Kinds of the tokens in a postfix queue; handy for inspecting pass one.
pub fn postfix_kinds(postfix: &[Spanned]) -> Vec<SymbolKind> {
    postfix.iter().map(|s| s.token.kind()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(c: char) -> Formula {
        Formula::atom(c)
    }

    #[test]
    fn test_single_proposition() {
        assert_eq!(parse("A"), Ok(atom('A')));
        assert_eq!(parse("  z  "), Ok(atom('z')));
    }

    #[test]
    fn test_binary_keeps_child_order() {
        assert_eq!(parse("A -> B"), Ok(Formula::implies(atom('A'), atom('B'))));
        assert_eq!(parse("B >> A"), Ok(Formula::implies(atom('B'), atom('A'))));
    }

    #[test]
    fn test_all_spellings() {
        let expected = Formula::and(atom('A'), Formula::not(atom('B')));
        for input in ["A&~B", "A ∧ ¬B", r"A /\ !B", "(A & (~B))", "[A & {~B}]"] {
            assert_eq!(parse(input), Ok(expected.clone()), "input {input:?}");
        }
        let expected = Formula::or(atom('p'), atom('q'));
        for input in ["p|q", "p ∨ q", r"p \/ q"] {
            assert_eq!(parse(input), Ok(expected.clone()), "input {input:?}");
        }
    }

    #[test]
    fn test_no_precedence_stack_order() {
        // A & B | C  ->  A ∧ (B ∨ C)
        assert_eq!(
            parse("A & B | C"),
            Ok(Formula::and(atom('A'), Formula::or(atom('B'), atom('C'))))
        );
        // ~A & B  ->  ¬(A ∧ B)
        assert_eq!(
            parse("~A & B"),
            Ok(Formula::not(Formula::and(atom('A'), atom('B'))))
        );
        // brackets override
        assert_eq!(
            parse("(~A) & B"),
            Ok(Formula::and(Formula::not(atom('A')), atom('B')))
        );
    }

    #[test]
    fn test_postfix_pass() {
        let postfix = to_postfix("(A -> B) & C").unwrap();
        assert_eq!(
            postfix_kinds(&postfix),
            vec![
                SymbolKind::Proposition,
                SymbolKind::Proposition,
                SymbolKind::Implication,
                SymbolKind::Proposition,
                SymbolKind::Conjunction,
            ]
        );
    }

    #[test]
    fn test_unclosed_open() {
        assert_eq!(
            parse("(A&B"),
            Err(ParseError::UnclosedOpen {
                open: '(',
                position: 0
            })
        );
    }

    #[test]
    fn test_unmatched_close() {
        assert_eq!(
            parse("A&B)"),
            Err(ParseError::UnmatchedClose {
                close: ')',
                position: 3
            })
        );
    }

    #[test]
    fn test_mismatched_bracket_style() {
        assert_eq!(
            parse("(A&B]"),
            Err(ParseError::MismatchedBracket {
                open: '(',
                close: ']',
                position: 4
            })
        );
    }

    #[test]
    fn test_operand_underflow() {
        assert!(matches!(
            parse("A&&B"),
            Err(ParseError::OperandUnderflow {
                operator: SymbolKind::Conjunction,
                needed: 2,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            parse("~"),
            Err(ParseError::OperandUnderflow {
                operator: SymbolKind::Negation,
                needed: 1,
                found: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(parse("A B"), Err(ParseError::Leftover(2)));
        assert_eq!(parse(""), Err(ParseError::Leftover(0)));
        assert_eq!(parse("()"), Err(ParseError::Leftover(0)));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            parse("A & 2"),
            Err(ParseError::UnexpectedCharacter {
                found: '2',
                position: 4
            })
        );
        assert!(parse("A <-> B").is_err());
    }
}
