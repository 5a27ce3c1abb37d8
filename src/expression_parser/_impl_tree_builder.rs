//! The tree is built by recursively splitting a range of tokens at the operator that should
//! be evaluated *last*. Only operators at the outermost parenthesis level of the range are
//! considered. Among them, the binary operator with the lowest priority index wins (the
//! first one if there are several), so `A or B and C` splits at `or` and `A implies B
//! implies C` is read as `A implies (B implies C)`. If there is no binary operator, the
//! range must start with a unary operator, which then becomes the parent of the rest.
//!
//! The builder assumes the tokens passed `validate`. Ranges that cannot be split signal an
//! inconsistency between the two and are reported as `InternalParseInvariant`.

use super::{Token, TokenKind};
use crate::log_targets;
use crate::{ConstraintError, Node, NodeOrigin, Operator, UnaryOperator};
use std::ops::Range;

/// Build a syntax tree from a validated token sequence.
pub fn build_tree(tokens: &[Token]) -> Result<Node, ConstraintError> {
    let builder = TreeBuilder::new(tokens);
    match builder.build(0..tokens.len(), 0)? {
        Some(root) => Ok(root),
        None => Err(ConstraintError::InternalParseInvariant {
            start: 0,
            end: tokens.len(),
            reason: "no tokens to build a tree from",
        }),
    }
}

/// **(internal)** Tokens together with the parenthesis depth of every token.
struct TreeBuilder<'a> {
    tokens: &'a [Token],
    depth: Vec<usize>,
}

impl<'a> TreeBuilder<'a> {
    fn new(tokens: &'a [Token]) -> TreeBuilder<'a> {
        let mut depth = Vec::with_capacity(tokens.len());
        let mut current: usize = 0;
        for token in tokens {
            current += token.opening();
            depth.push(current);
            current = current.saturating_sub(token.closing());
        }
        TreeBuilder { tokens, depth }
    }

    /// **(internal)** Build the subtree for `range`. An empty range produces no node.
    fn build(&self, range: Range<usize>, level: usize) -> Result<Option<Node>, ConstraintError> {
        let tokens = &self.tokens[range.clone()];
        match tokens {
            [] => Ok(None),
            [single] => self.mk_leaf(single, level, &range).map(Some),
            [Token {
                kind: TokenKind::Unary(op),
                ..
            }, operand @ Token {
                kind: TokenKind::Operand(_),
                ..
            }] => {
                let inner = self.mk_leaf(operand, level + 1, &range)?;
                Ok(Some(self.mk_unary(*op, inner, &tokens[0], level)))
            }
            [left @ Token {
                kind: TokenKind::Operand(_),
                ..
            }, Token {
                kind: TokenKind::Binary(op),
                position,
                ..
            }, right @ Token {
                kind: TokenKind::Operand(_),
                ..
            }] => {
                let left = self.mk_leaf(left, level + 1, &range)?;
                let right = self.mk_leaf(right, level + 1, &range)?;
                let origin = NodeOrigin {
                    level,
                    position: *position,
                };
                Ok(Some(Node::mk_binary(*op, left, right).with_origin(origin)))
            }
            _ => self.split(range, level).map(Some),
        }
    }

    /// **(internal)** The general case: split the range at its parent operator.
    fn split(&self, range: Range<usize>, level: usize) -> Result<Node, ConstraintError> {
        let parent = self.find_parent(&range)?;
        let token = &self.tokens[parent];
        log::trace!(
            target: log_targets::PARSER,
            "Split {:?} at `{}` (token {}).",
            range,
            token.text(),
            parent
        );
        match token.kind() {
            TokenKind::Binary(op) => {
                let left = self.build(range.start..parent, level + 1)?;
                let right = self.build((parent + 1)..range.end, level + 1)?;
                match (left, right) {
                    (Some(left), Some(right)) => {
                        let origin = NodeOrigin {
                            level,
                            position: parent,
                        };
                        Ok(Node::mk_binary(*op, left, right).with_origin(origin))
                    }
                    _ => Err(invariant(&range, "binary operator without two operands")),
                }
            }
            TokenKind::Unary(op) => {
                if parent != range.start {
                    return Err(invariant(&range, "unary operator preceded by other tokens"));
                }
                match self.build((parent + 1)..range.end, level + 1)? {
                    Some(inner) => Ok(self.mk_unary(*op, inner, token, level)),
                    None => Err(invariant(&range, "unary operator without operand")),
                }
            }
            _ => Err(invariant(&range, "parent candidate is not an operator")),
        }
    }

    /// **(internal)** Find the token at which `range` should be split.
    ///
    /// Operators nested deeper in parentheses than the shallowest operator of the range are
    /// enclosed by a group and cannot be the parent.
    fn find_parent(&self, range: &Range<usize>) -> Result<usize, ConstraintError> {
        let operators: Vec<usize> = range
            .clone()
            .filter(|i| self.tokens[*i].is_operator())
            .collect();
        let min_depth = match operators.iter().map(|i| self.depth[*i]).min() {
            Some(depth) => depth,
            None => return Err(invariant(range, "no operator to split at")),
        };
        let candidates = operators
            .into_iter()
            .filter(|i| self.depth[*i] == min_depth);

        let mut best_binary: Option<(usize, usize)> = None;
        let mut first_unary: Option<usize> = None;
        for i in candidates {
            match self.tokens[i].kind() {
                TokenKind::Binary(op) => {
                    let priority = Operator::Binary(*op).priority();
                    // Strict comparison: the first operator with a given priority wins.
                    if best_binary.map_or(true, |(_, best)| priority < best) {
                        best_binary = Some((i, priority));
                    }
                }
                TokenKind::Unary(_) => {
                    if first_unary.is_none() {
                        first_unary = Some(i);
                    }
                }
                _ => {}
            }
        }
        match (best_binary, first_unary) {
            (Some((i, _)), _) => Ok(i),
            (None, Some(i)) => Ok(i),
            (None, None) => Err(invariant(range, "no operator to split at")),
        }
    }

    /// **(internal)** Create an operand leaf for `token`.
    fn mk_leaf(
        &self,
        token: &Token,
        level: usize,
        range: &Range<usize>,
    ) -> Result<Node, ConstraintError> {
        match token.kind() {
            TokenKind::Operand(name) => Ok(Node::mk_operand(name).with_origin(NodeOrigin {
                level,
                position: token.position(),
            })),
            _ => Err(invariant(range, "operator where an operand is expected")),
        }
    }

    /// **(internal)** Create a unary node for the operator `token` over `inner`.
    fn mk_unary(&self, op: UnaryOperator, inner: Node, token: &Token, level: usize) -> Node {
        let node = match op {
            UnaryOperator::Not => Node::mk_not(inner),
        };
        node.with_origin(NodeOrigin {
            level,
            position: token.position(),
        })
    }
}

/// **(internal)** Build an `InternalParseInvariant` error for `range`.
fn invariant(range: &Range<usize>, reason: &'static str) -> ConstraintError {
    ConstraintError::InternalParseInvariant {
        start: range.start,
        end: range.end,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use crate::expression_parser::{build_tree, preprocess, tokenize, Token};
    use crate::{BinaryOperator, ConstraintError, NodeOrigin, OperatorVocabulary};

    fn tokens(text: &str) -> Vec<Token> {
        let vocabulary = OperatorVocabulary::standard();
        tokenize(&preprocess(text))
            .iter()
            .enumerate()
            .map(|(i, word)| Token::classify(word, i, &vocabulary))
            .collect()
    }

    fn tree(text: &str) -> String {
        build_tree(&tokens(text)).unwrap().to_string()
    }

    #[test]
    fn build_tree_base_cases() {
        assert_eq!("A", tree("A"));
        assert_eq!("NOT[A][]", tree("not A"));
        assert_eq!("AND[A][B]", tree("A and B"));
        assert_eq!("A", tree("((A))"));
    }

    #[test]
    fn build_tree_operator_priority() {
        assert_eq!("OR[A][AND[B][C]]", tree("A or B and C"));
        assert_eq!("OR[AND[A][B]][C]", tree("A and B or C"));
        assert_eq!(
            "EQUIVALENCE[IMPLIES[A][OR[B][AND[C][XOR[D][E]]]]][F]",
            tree("A implies B or C and D xor E equivalence F")
        );
        assert_eq!("AND[NOT[A][]][B]", tree("not A and B"));
        assert_eq!("OR[A][NOT[NOT[B][]][]]", tree("A or not not B"));
    }

    #[test]
    fn build_tree_same_priority_splits_at_first() {
        assert_eq!("AND[A][AND[B][C]]", tree("A and B and C"));
        assert_eq!("IMPLIES[A][REQUIRES[B][C]]", tree("A implies B requires C"));
        assert_eq!("EXCLUDES[A][IMPLIES[B][C]]", tree("A excludes B implies C"));
    }

    #[test]
    fn build_tree_parentheses() {
        assert_eq!("OR[A][AND[B][C]]", tree("A or (B and C)"));
        assert_eq!("AND[OR[A][B]][C]", tree("(A or B) and C"));
        assert_eq!("AND[OR[A][B]][OR[C][D]]", tree("(A or B) and (C or D)"));
        assert_eq!("OR[AND[A][OR[B][C]]][D]", tree("A and (B or C) or D"));
        assert_eq!("NOT[OR[A][B]][]", tree("not (A or B)"));
        assert_eq!("OR[NOT[A][]][B]", tree("(not A) or B"));
        assert_eq!(
            "AND[OR[X][AND[Y][Z]]][W]",
            tree("((X or (Y and Z)) and W)")
        );
        assert_eq!("OR[A][B]", tree("(((A)) or ((B)))"));
    }

    #[test]
    fn build_tree_origin() {
        let root = build_tree(&tokens("A or not B")).unwrap();
        assert_eq!(
            Some(NodeOrigin {
                level: 0,
                position: 1
            }),
            root.origin()
        );
        assert!(root.is_binary_op(BinaryOperator::Or));
        let not = root.right().unwrap();
        assert_eq!(
            Some(NodeOrigin {
                level: 1,
                position: 2
            }),
            not.origin()
        );
        assert_eq!(
            Some(NodeOrigin {
                level: 2,
                position: 3
            }),
            not.left().unwrap().origin()
        );
    }

    #[test]
    fn build_tree_internal_invariant() {
        // The validator rejects these, the builder must not panic on them.
        assert!(matches!(
            build_tree(&tokens("A B")),
            Err(ConstraintError::InternalParseInvariant { .. })
        ));
        assert!(matches!(
            build_tree(&tokens("and")),
            Err(ConstraintError::InternalParseInvariant { .. })
        ));
        assert!(matches!(
            build_tree(&tokens("A not B")),
            Err(ConstraintError::InternalParseInvariant { .. })
        ));
        assert!(matches!(
            build_tree(&[]),
            Err(ConstraintError::InternalParseInvariant { .. })
        ));
    }
}
