use super::{Token, TokenKind};
use crate::log_targets;
use crate::{ConstraintError, Misplacement};

/// Check a token sequence against the syntax rules of the constraint language.
///
/// The rules are checked in a fixed order and the first violation is returned:
///
///  1. The expression is not empty.
///  2. Parentheses are balanced (and no group is closed before it is opened).
///  3. There is no empty parenthesis pair.
///  4. No binary operator starts or ends the expression.
///  5. No unary operator ends the expression.
///  6. No two binary operators are adjacent.
///  7. No unary operator is directly followed by a binary operator.
///  8. No two operands are adjacent.
///  9. No parenthesis is attached to a binary operator.
///  10. No closing parenthesis is attached to a unary operator.
///  11. No unary operator directly follows an operand.
pub fn validate(tokens: &[Token]) -> Result<(), ConstraintError> {
    let result = check_not_empty(tokens)
        .and_then(|_| check_balanced_parentheses(tokens))
        .and_then(|_| check_empty_parentheses(tokens))
        .and_then(|_| check_binary_boundaries(tokens))
        .and_then(|_| check_unary_at_end(tokens))
        .and_then(|_| check_pairs(tokens, adjacent_binary))
        .and_then(|_| check_pairs(tokens, unary_before_binary))
        .and_then(|_| check_pairs(tokens, adjacent_operands))
        .and_then(|_| check_parenthesized_operators(tokens))
        .and_then(|_| check_pairs(tokens, unary_after_operand));
    if let Err(error) = &result {
        log::debug!(target: log_targets::VALIDATION, "Rejected {} tokens: {}", tokens.len(), error);
    }
    result
}

/// **(internal)** Build a `MisplacedOperator` error for the given tokens.
fn misplaced(reason: Misplacement, tokens: &[&Token]) -> ConstraintError {
    ConstraintError::MisplacedOperator {
        reason,
        tokens: tokens.iter().map(|t| t.text().to_string()).collect(),
        positions: tokens.iter().map(|t| t.position()).collect(),
    }
}

/// **(internal)** Rule 1.
fn check_not_empty(tokens: &[Token]) -> Result<(), ConstraintError> {
    if tokens.is_empty() {
        Err(ConstraintError::EmptyExpression)
    } else {
        Ok(())
    }
}

/// **(internal)** Rule 2.
fn check_balanced_parentheses(tokens: &[Token]) -> Result<(), ConstraintError> {
    let opening: usize = tokens.iter().map(|t| t.opening()).sum();
    let closing: usize = tokens.iter().map(|t| t.closing()).sum();
    let mut depth: usize = 0;
    let mut premature_close = false;
    for token in tokens {
        depth += token.opening();
        if token.closing() > depth {
            premature_close = true;
            break;
        }
        depth -= token.closing();
    }
    if opening != closing || premature_close {
        Err(ConstraintError::UnbalancedParentheses { opening, closing })
    } else {
        Ok(())
    }
}

/// **(internal)** Rule 3. Any token made only of parentheses is an empty group at this point,
/// since balance has been checked already.
fn check_empty_parentheses(tokens: &[Token]) -> Result<(), ConstraintError> {
    match tokens.iter().find(|t| *t.kind() == TokenKind::Empty) {
        Some(token) => Err(ConstraintError::EmptyParentheses {
            position: token.position(),
        }),
        None => Ok(()),
    }
}

/// **(internal)** Rule 4.
fn check_binary_boundaries(tokens: &[Token]) -> Result<(), ConstraintError> {
    // Rule 1 guarantees that both exist.
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    if first.is_binary() {
        Err(misplaced(Misplacement::LeadingBinary, &[first]))
    } else if last.is_binary() {
        Err(misplaced(Misplacement::TrailingBinary, &[last]))
    } else {
        Ok(())
    }
}

/// **(internal)** Rule 5.
fn check_unary_at_end(tokens: &[Token]) -> Result<(), ConstraintError> {
    let last = &tokens[tokens.len() - 1];
    if last.is_unary() {
        Err(misplaced(Misplacement::TrailingUnary, &[last]))
    } else {
        Ok(())
    }
}

/// **(internal)** Rules 9 and 10: operators that carry parentheses they cannot own.
fn check_parenthesized_operators(tokens: &[Token]) -> Result<(), ConstraintError> {
    for token in tokens {
        if token.is_binary() && token.has_parentheses() {
            return Err(misplaced(Misplacement::ParenthesizedBinary, &[token]));
        }
        if token.is_unary() && token.closing() > 0 {
            return Err(misplaced(
                Misplacement::UnaryBeforeClosingParenthesis,
                &[token],
            ));
        }
    }
    Ok(())
}

/// **(internal)** Apply a rule to every pair of neighbouring tokens.
fn check_pairs<F>(tokens: &[Token], rule: F) -> Result<(), ConstraintError>
where
    F: Fn(&Token, &Token) -> Option<ConstraintError>,
{
    for pair in tokens.windows(2) {
        if let Some(error) = rule(&pair[0], &pair[1]) {
            return Err(error);
        }
    }
    Ok(())
}

/// **(internal)** Rule 6.
fn adjacent_binary(left: &Token, right: &Token) -> Option<ConstraintError> {
    if left.is_binary() && right.is_binary() {
        Some(misplaced(Misplacement::AdjacentBinary, &[left, right]))
    } else {
        None
    }
}

/// **(internal)** Rule 7.
fn unary_before_binary(left: &Token, right: &Token) -> Option<ConstraintError> {
    if left.is_unary() && right.is_binary() {
        Some(misplaced(Misplacement::UnaryBeforeBinary, &[left, right]))
    } else {
        None
    }
}

/// **(internal)** Rule 8.
fn adjacent_operands(left: &Token, right: &Token) -> Option<ConstraintError> {
    if left.is_operand() && right.is_operand() {
        Some(ConstraintError::AdjacentOperands {
            tokens: vec![left.text().to_string(), right.text().to_string()],
            positions: vec![left.position(), right.position()],
        })
    } else {
        None
    }
}

/// **(internal)** Rule 11.
fn unary_after_operand(left: &Token, right: &Token) -> Option<ConstraintError> {
    if left.is_operand() && right.is_unary() {
        Some(misplaced(Misplacement::UnaryAfterOperand, &[left, right]))
    } else {
        None
    }
}
