//! Symbol catalog
//!
//! Canonical identities for connectives, brackets and propositions, together
//! with every textual spelling the parser accepts for them. The first spelling
//! of each kind is the one used when printing.

use std::fmt;

/// The kind of a symbol appearing in a formula or in its source text.
///
/// `Wildcard` and `Unknown` are sentinels: the former is only meaningful in
/// rule patterns (see [`SymbolKind::matches`]), the latter is the default for
/// anything that is not a valid symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    /// Atomic proposition (a single ASCII letter)
    Proposition,
    /// Unary negation
    Negation,
    /// Binary conjunction
    Conjunction,
    /// Binary disjunction
    Disjunction,
    /// Binary (material) implication
    Implication,
    /// Opening bracket of any style
    LeftParen,
    /// Closing bracket of any style
    RightParen,
    /// Matches any kind during rule-pattern lookup
    Wildcard,
    /// Invalid symbol
    #[default]
    Unknown,
}

const PROPOSITION_SPELLINGS: [&str; 52] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
    "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];
const NEGATION_SPELLINGS: [&str; 3] = ["¬", "~", "!"];
const CONJUNCTION_SPELLINGS: [&str; 3] = ["∧", "&", r"/\"];
const DISJUNCTION_SPELLINGS: [&str; 3] = ["∨", "|", r"\/"];
const IMPLICATION_SPELLINGS: [&str; 3] = ["→", "->", ">>"];
const LEFT_PAREN_SPELLINGS: [&str; 3] = ["(", "[", "{"];
const RIGHT_PAREN_SPELLINGS: [&str; 3] = [")", "]", "}"];

impl SymbolKind {
    /// The four connectives, in catalog order.
    pub const CONNECTIVES: [SymbolKind; 4] = [
        SymbolKind::Negation,
        SymbolKind::Conjunction,
        SymbolKind::Disjunction,
        SymbolKind::Implication,
    ];

    /// Wildcard-aware comparison used for rule lookup.
    ///
    /// `Wildcard` on either side matches anything; otherwise this is plain
    /// equality. Formula equality never goes through here.
    #[must_use]
    pub fn matches(self, other: SymbolKind) -> bool {
        self == SymbolKind::Wildcard || other == SymbolKind::Wildcard || self == other
    }

    /// Number of operands a formula node of this kind takes.
    ///
    /// Returns `None` for brackets and sentinels, which never appear in a tree.
    #[must_use]
    pub fn arity(self) -> Option<usize> {
        match self {
            SymbolKind::Proposition => Some(0),
            SymbolKind::Negation => Some(1),
            SymbolKind::Conjunction | SymbolKind::Disjunction | SymbolKind::Implication => Some(2),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_connective(self) -> bool {
        Self::CONNECTIVES.contains(&self)
    }

    #[must_use]
    pub fn is_bracket(self) -> bool {
        matches!(self, SymbolKind::LeftParen | SymbolKind::RightParen)
    }

    /// Every accepted spelling of this kind, default first.
    #[must_use]
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            SymbolKind::Proposition => &PROPOSITION_SPELLINGS,
            SymbolKind::Negation => &NEGATION_SPELLINGS,
            SymbolKind::Conjunction => &CONJUNCTION_SPELLINGS,
            SymbolKind::Disjunction => &DISJUNCTION_SPELLINGS,
            SymbolKind::Implication => &IMPLICATION_SPELLINGS,
            SymbolKind::LeftParen => &LEFT_PAREN_SPELLINGS,
            SymbolKind::RightParen => &RIGHT_PAREN_SPELLINGS,
            SymbolKind::Wildcard | SymbolKind::Unknown => &[],
        }
    }

    /// The spelling used when printing, or `""` for sentinels.
    #[must_use]
    pub fn default_spelling(self) -> &'static str {
        self.spellings().first().copied().unwrap_or("")
    }

    /// Find the accepted spelling of this kind that prefixes `input`.
    ///
    /// When several spellings match, the longest wins; equal lengths fall back
    /// to catalog order. Returns `None` when nothing matches.
    #[must_use]
    pub fn match_prefix(self, input: &str) -> Option<&'static str> {
        self.spellings()
            .iter()
            .copied()
            .filter(|spelling| input.starts_with(spelling))
            .fold(None, |best: Option<&'static str>, spelling| match best {
                Some(b) if b.len() >= spelling.len() => Some(b),
                _ => Some(spelling),
            })
    }

    /// Human-readable name, used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Proposition => "proposition",
            SymbolKind::Negation => "negation",
            SymbolKind::Conjunction => "conjunction",
            SymbolKind::Disjunction => "disjunction",
            SymbolKind::Implication => "implication",
            SymbolKind::LeftParen => "left parenthesis",
            SymbolKind::RightParen => "right parenthesis",
            SymbolKind::Wildcard => "wildcard",
            SymbolKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mirror of an opening bracket spelling, e.g. `[` -> `]`.
#[must_use]
pub fn closing_bracket(open: &str) -> Option<&'static str> {
    LEFT_PAREN_SPELLINGS
        .iter()
        .position(|s| *s == open)
        .map(|i| RIGHT_PAREN_SPELLINGS[i])
}

/// Mirror of a closing bracket spelling, e.g. `}` -> `{`.
#[must_use]
pub fn opening_bracket(close: &str) -> Option<&'static str> {
    RIGHT_PAREN_SPELLINGS
        .iter()
        .position(|s| *s == close)
        .map(|i| LEFT_PAREN_SPELLINGS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_everything() {
        for kind in [
            SymbolKind::Proposition,
            SymbolKind::Negation,
            SymbolKind::Implication,
            SymbolKind::RightParen,
            SymbolKind::Unknown,
        ] {
            assert!(SymbolKind::Wildcard.matches(kind));
            assert!(kind.matches(SymbolKind::Wildcard));
        }
        assert!(!SymbolKind::Negation.matches(SymbolKind::Conjunction));
    }

    #[test]
    fn test_wildcard_stays_out_of_equality() {
        assert_ne!(SymbolKind::Wildcard, SymbolKind::Negation);
        assert_eq!(SymbolKind::default(), SymbolKind::Unknown);
    }

    #[test]
    fn test_match_prefix() {
        assert_eq!(SymbolKind::Negation.match_prefix("~A"), Some("~"));
        assert_eq!(SymbolKind::Conjunction.match_prefix(r"/\B"), Some(r"/\"));
        assert_eq!(SymbolKind::Disjunction.match_prefix(r"\/B"), Some(r"\/"));
        assert_eq!(SymbolKind::Implication.match_prefix("->B"), Some("->"));
        assert_eq!(SymbolKind::Implication.match_prefix(">>B"), Some(">>"));
        assert_eq!(SymbolKind::Implication.match_prefix("→B"), Some("→"));
        assert_eq!(SymbolKind::Proposition.match_prefix("qrs"), Some("q"));
        assert_eq!(SymbolKind::Proposition.match_prefix("1"), None);
        assert_eq!(SymbolKind::Implication.match_prefix("-B"), None);
        assert_eq!(SymbolKind::Wildcard.match_prefix("A"), None);
    }

    #[test]
    fn test_default_spellings() {
        assert_eq!(SymbolKind::Negation.default_spelling(), "¬");
        assert_eq!(SymbolKind::Conjunction.default_spelling(), "∧");
        assert_eq!(SymbolKind::Disjunction.default_spelling(), "∨");
        assert_eq!(SymbolKind::Implication.default_spelling(), "→");
        assert_eq!(SymbolKind::Unknown.default_spelling(), "");
    }

    #[test]
    fn test_bracket_mirrors() {
        assert_eq!(closing_bracket("("), Some(")"));
        assert_eq!(closing_bracket("{"), Some("}"));
        assert_eq!(opening_bracket("]"), Some("["));
        assert_eq!(closing_bracket(")"), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(SymbolKind::Proposition.arity(), Some(0));
        assert_eq!(SymbolKind::Negation.arity(), Some(1));
        assert_eq!(SymbolKind::Implication.arity(), Some(2));
        assert_eq!(SymbolKind::LeftParen.arity(), None);
        assert!(SymbolKind::Disjunction.is_connective());
        assert!(!SymbolKind::Proposition.is_connective());
    }

    #[test]
    fn test_all_propositions_are_distinct_letters() {
        let spellings = SymbolKind::Proposition.spellings();
        assert_eq!(spellings.len(), 52);
        let mut sorted = spellings.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 52);
        assert!(spellings
            .iter()
            .all(|s| s.len() == 1 && s.chars().all(|c| c.is_ascii_alphabetic())));
    }
}
