//! Formula lexer
//!
//! Tokenizes infix formula text using the logos crate. The token attributes
//! mirror the spellings in [`crate::symbol`]; whitespace of any kind is skipped.

use crate::symbol::SymbolKind;
use logos::Logos;
use std::ops::Range;

/// Formula tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Single-letter proposition
    #[regex("[A-Za-z]", |lex| lex.slice().chars().next())]
    Proposition(char),

    #[token("¬")]
    #[token("~")]
    #[token("!")]
    Negation,

    #[token("∧")]
    #[token("&")]
    #[token(r"/\")]
    Conjunction,

    #[token("∨")]
    #[token("|")]
    #[token(r"\/")]
    Disjunction,

    #[token("→")]
    #[token("->")]
    #[token(">>")]
    Implication,

    /// Opening bracket, keeping its style
    #[regex(r"[(\[{]", |lex| lex.slice().chars().next())]
    LeftParen(char),

    /// Closing bracket, keeping its style
    #[regex(r"[)\]}]", |lex| lex.slice().chars().next())]
    RightParen(char),
}

impl Token {
    /// Catalog kind of this token.
    #[must_use]
    pub fn kind(self) -> SymbolKind {
        match self {
            Token::Proposition(_) => SymbolKind::Proposition,
            Token::Negation => SymbolKind::Negation,
            Token::Conjunction => SymbolKind::Conjunction,
            Token::Disjunction => SymbolKind::Disjunction,
            Token::Implication => SymbolKind::Implication,
            Token::LeftParen(_) => SymbolKind::LeftParen,
            Token::RightParen(_) => SymbolKind::RightParen,
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// Lexer error: no token accepts the input at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    /// Byte offset of the offending character
    pub position: usize,
    /// The character that could not be tokenized
    pub found: char,
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lexer error at position {}: unexpected {:?}",
            self.position, self.found
        )
    }
}

impl std::error::Error for LexerError {}

/// Tokenize `input`, stopping at the first character no token accepts.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, LexerError> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(Spanned { token, span }),
            Err(()) => Err(LexerError {
                position: span.start,
                found: input[span.start..].chars().next().unwrap_or('\u{fffd}'),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SymbolKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|s| s.token.kind())
            .collect()
    }

    #[test]
    fn test_basic_tokens() {
        let mut lexer = Token::lexer("(A & ~b)");

        assert_eq!(lexer.next(), Some(Ok(Token::LeftParen('('))));
        assert_eq!(lexer.next(), Some(Ok(Token::Proposition('A'))));
        assert_eq!(lexer.next(), Some(Ok(Token::Conjunction)));
        assert_eq!(lexer.next(), Some(Ok(Token::Negation)));
        assert_eq!(lexer.next(), Some(Ok(Token::Proposition('b'))));
        assert_eq!(lexer.next(), Some(Ok(Token::RightParen(')'))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_every_catalog_spelling_lexes_to_its_kind() {
        for kind in [
            SymbolKind::Proposition,
            SymbolKind::Negation,
            SymbolKind::Conjunction,
            SymbolKind::Disjunction,
            SymbolKind::Implication,
            SymbolKind::LeftParen,
            SymbolKind::RightParen,
        ] {
            for spelling in kind.spellings() {
                assert_eq!(kinds(spelling), vec![kind], "spelling {spelling:?}");
            }
        }
    }

    #[test]
    fn test_adjacent_multichar_operators() {
        assert_eq!(
            kinds(r"A->B/\C\/D>>E"),
            vec![
                SymbolKind::Proposition,
                SymbolKind::Implication,
                SymbolKind::Proposition,
                SymbolKind::Conjunction,
                SymbolKind::Proposition,
                SymbolKind::Disjunction,
                SymbolKind::Proposition,
                SymbolKind::Implication,
                SymbolKind::Proposition,
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let tokens = tokenize(" A\t&\n B ").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].span, 1..2);
        assert_eq!(tokens[2].span, 6..7);
    }

    #[test]
    fn test_bracket_style_is_kept() {
        let tokens = tokenize("[{}]").unwrap();
        let brackets: Vec<Token> = tokens.into_iter().map(|s| s.token).collect();
        assert_eq!(
            brackets,
            vec![
                Token::LeftParen('['),
                Token::LeftParen('{'),
                Token::RightParen('}'),
                Token::RightParen(']'),
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("A & 1").unwrap_err();
        assert_eq!(err.position, 4);
        assert_eq!(err.found, '1');

        let err = tokenize("A - B").unwrap_err();
        assert_eq!(err.found, '-');
    }
}
