use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Everything that can go wrong while configuring a parser or parsing a constraint.
///
/// Syntax errors are reported one at a time: validation stops at the first violated rule.
/// `InternalParseInvariant` is never caused by user input alone; it signals that the
/// validator accepted something the tree builder cannot handle.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConstraintError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unbalanced parentheses: {opening} opening and {closing} closing")]
    UnbalancedParentheses { opening: usize, closing: usize },
    #[error("empty parentheses at token {position}")]
    EmptyParentheses { position: usize },
    #[error("{reason}: {tokens:?} at {positions:?}")]
    MisplacedOperator {
        reason: Misplacement,
        tokens: Vec<String>,
        positions: Vec<usize>,
    },
    #[error("missing operator between operands {tokens:?} at {positions:?}")]
    AdjacentOperands {
        tokens: Vec<String>,
        positions: Vec<usize>,
    },
    #[error("cannot build tree for tokens {start}..{end}: {reason}")]
    InternalParseInvariant {
        start: usize,
        end: usize,
        reason: &'static str,
    },
    #[error("expression too complex: {measure} is {actual}, limit is {limit}")]
    ExpressionTooComplex {
        measure: &'static str,
        actual: usize,
        limit: usize,
    },
    #[error("invalid operator keyword `{keyword}`: {reason}")]
    InvalidKeyword {
        keyword: String,
        reason: &'static str,
    },
}

/// The reason behind a `ConstraintError::MisplacedOperator`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Misplacement {
    /// `and A`
    LeadingBinary,
    /// `A and`
    TrailingBinary,
    /// `A and not`
    TrailingUnary,
    /// `A and or B`
    AdjacentBinary,
    /// `not and A`
    UnaryBeforeBinary,
    /// `(and A)`, `(A or) B`
    ParenthesizedBinary,
    /// `(A or not) B`
    UnaryBeforeClosingParenthesis,
    /// `A not B`
    UnaryAfterOperand,
}

impl Display for Misplacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Misplacement::LeadingBinary => "binary operator at the start of the expression",
            Misplacement::TrailingBinary => "binary operator at the end of the expression",
            Misplacement::TrailingUnary => "unary operator at the end of the expression",
            Misplacement::AdjacentBinary => "two adjacent binary operators",
            Misplacement::UnaryBeforeBinary => "unary operator followed by a binary operator",
            Misplacement::ParenthesizedBinary => "binary operator with attached parenthesis",
            Misplacement::UnaryBeforeClosingParenthesis => {
                "unary operator followed by a closing parenthesis"
            }
            Misplacement::UnaryAfterOperand => "unary operator directly after an operand",
        };
        write!(f, "{}", message)
    }
}
