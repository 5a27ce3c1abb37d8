//! Tokens and the individual stages of constraint parsing.
//!
//! A raw constraint string is first normalized (`preprocess`) so that every token is separated
//! by exactly one space and parentheses stick to the word they enclose:
//!
//! ```rust
//! use logic_constraints::expression_parser::{preprocess, tokenize};
//!
//! let text = preprocess("  A   and( B or  C )  ");
//! assert_eq!("A and (B or C)", text);
//! assert_eq!(vec!["A", "and", "(B", "or", "C)"], tokenize(&text));
//! ```
//!
//! The words are then classified against an `OperatorVocabulary` (`Token::classify`),
//! checked by the `validate` function and finally turned into a tree by `build_tree`.
//! Usually, you want to call all of these at once using a `ConstraintParser`.

use crate::{BinaryOperator, OperatorVocabulary, UnaryOperator};

/// **(internal)** Whitespace and parenthesis normalization, splitting into words.
mod _impl_preprocess;

/// **(internal)** Syntax rules checked before a tree is built.
mod _impl_validator;

/// **(internal)** Precedence-based recursive construction of the syntax tree.
mod _impl_tree_builder;

pub use _impl_preprocess::{preprocess, tokenize};
pub use _impl_tree_builder::build_tree;
pub use _impl_validator::validate;

/// What a token stands for once its parentheses are removed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Operand(String),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    /// A token made only of parentheses, e.g. `()`.
    Empty,
}

/// One word of a preprocessed constraint, together with the parentheses attached to it.
///
/// For example, the word `((A)` is an operand `A` with two `opening` and one `closing`
/// parenthesis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    position: usize,
    text: String,
    opening: usize,
    closing: usize,
    kind: TokenKind,
}

impl Token {
    /// Create a token from a `word` at the given `position` in the token sequence. The word
    /// should come from `tokenize`, i.e. it contains no whitespace and parentheses only at
    /// its start and end.
    pub fn classify(word: &str, position: usize, vocabulary: &OperatorVocabulary) -> Token {
        let core = word.trim_start_matches('(');
        let opening = word.len() - core.len();
        let core_trimmed = core.trim_end_matches(')');
        let closing = core.len() - core_trimmed.len();
        let kind = if core_trimmed.is_empty() {
            TokenKind::Empty
        } else {
            match vocabulary.operator(core_trimmed) {
                Some(crate::Operator::Unary(op)) => TokenKind::Unary(op),
                Some(crate::Operator::Binary(op)) => TokenKind::Binary(op),
                None => TokenKind::Operand(core_trimmed.to_string()),
            }
        };
        Token {
            position,
            text: word.to_string(),
            opening,
            closing,
            kind,
        }
    }

    /// Index of this token in the token sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The word as it appeared in the preprocessed input, parentheses included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of `(` attached to the start of the word.
    pub fn opening(&self) -> usize {
        self.opening
    }

    /// Number of `)` attached to the end of the word.
    pub fn closing(&self) -> usize {
        self.closing
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn is_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Operand(_))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self.kind, TokenKind::Unary(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.kind, TokenKind::Binary(_))
    }

    pub fn is_operator(&self) -> bool {
        self.is_unary() || self.is_binary()
    }

    /// True if any parenthesis is attached to this token.
    pub fn has_parentheses(&self) -> bool {
        self.opening > 0 || self.closing > 0
    }
}
