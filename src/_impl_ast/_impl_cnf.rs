//! The three rewriting passes that bring a tree into conjunctive normal form.
//!
//! Every pass consumes the tree and returns the rewritten one. Nodes that are kept (operand
//! leaves, and `NOT`/`AND`/`OR` nodes that are only rebuilt with new children) keep their
//! origin, nodes created by a rewrite rule have none.

use crate::BinaryOperator::{And, Equivalence, Excludes, Implies, Or, Requires, Xor};
use crate::NodeKind::{Binary, Operand, Unary};
use crate::{Node, UnaryOperator};

impl Node {
    /// Rewrite `IMPLIES`, `REQUIRES`, `EXCLUDES`, `EQUIVALENCE` and `XOR` using only `NOT`,
    /// `AND` and `OR`:
    ///
    ///  - `P IMPLIES Q` and `P REQUIRES Q` become `NOT P OR Q`,
    ///  - `P EXCLUDES Q` becomes `NOT P OR NOT Q`,
    ///  - `P EQUIVALENCE Q` becomes `(P OR NOT Q) AND (NOT P OR Q)`,
    ///  - `P XOR Q` becomes `(P OR Q) AND (NOT P OR NOT Q)`.
    pub(crate) fn eliminate_complex_operators(self) -> Node {
        let Node { kind, origin } = self;
        match kind {
            Operand(name) => Node {
                kind: Operand(name),
                origin,
            },
            Unary(op, inner) => Node {
                kind: Unary(op, Box::new((*inner).eliminate_complex_operators())),
                origin,
            },
            Binary(op, left, right) => {
                let p = (*left).eliminate_complex_operators();
                let q = (*right).eliminate_complex_operators();
                match op {
                    And | Or => Node {
                        kind: Binary(op, Box::new(p), Box::new(q)),
                        origin,
                    },
                    Implies | Requires => Node::mk_or(Node::mk_not(p), q),
                    Excludes => Node::mk_or(Node::mk_not(p), Node::mk_not(q)),
                    Equivalence => Node::mk_and(
                        Node::mk_or(p.clone(), Node::mk_not(q.clone())),
                        Node::mk_or(Node::mk_not(p), q),
                    ),
                    Xor => Node::mk_and(
                        Node::mk_or(p.clone(), q.clone()),
                        Node::mk_or(Node::mk_not(p), Node::mk_not(q)),
                    ),
                }
            }
        }
    }

    /// Push negations towards the leaves using De Morgan's laws and remove double negations.
    ///
    /// Negations of complex operators are left in place (the operator is not rewritten), so
    /// the result is in negation normal form only if `eliminate_complex_operators` ran first.
    pub(crate) fn move_nots_inwards(self) -> Node {
        let Node { kind, origin } = self;
        match kind {
            Operand(name) => Node {
                kind: Operand(name),
                origin,
            },
            Unary(UnaryOperator::Not, inner) => {
                let Node {
                    kind: inner_kind,
                    origin: inner_origin,
                } = *inner;
                match inner_kind {
                    Operand(name) => Node {
                        kind: Unary(
                            UnaryOperator::Not,
                            Box::new(Node {
                                kind: Operand(name),
                                origin: inner_origin,
                            }),
                        ),
                        origin,
                    },
                    Unary(UnaryOperator::Not, y) => (*y).move_nots_inwards(),
                    Binary(Or, p, q) => {
                        Node::mk_and(Node::mk_not(*p), Node::mk_not(*q)).move_nots_inwards()
                    }
                    Binary(And, p, q) => {
                        Node::mk_or(Node::mk_not(*p), Node::mk_not(*q)).move_nots_inwards()
                    }
                    Binary(op, p, q) => {
                        let inner = Node {
                            kind: Binary(
                                op,
                                Box::new((*p).move_nots_inwards()),
                                Box::new((*q).move_nots_inwards()),
                            ),
                            origin: inner_origin,
                        };
                        Node {
                            kind: Unary(UnaryOperator::Not, Box::new(inner)),
                            origin,
                        }
                    }
                }
            }
            Binary(op, left, right) => Node {
                kind: Binary(
                    op,
                    Box::new((*left).move_nots_inwards()),
                    Box::new((*right).move_nots_inwards()),
                ),
                origin,
            },
        }
    }

    /// Distribute disjunctions over conjunctions: `(A AND B) OR Q` becomes
    /// `(A OR Q) AND (B OR Q)` and `P OR (A AND B)` becomes `(P OR A) AND (P OR B)`.
    ///
    /// The children of a disjunction are distributed first. A rewritten node is distributed
    /// again, so the result contains no `AND` below an `OR` (for a tree in negation normal
    /// form).
    pub(crate) fn distribute_ors(self) -> Node {
        let Node { kind, origin } = self;
        match kind {
            Binary(Or, left, right) => {
                let p = (*left).distribute_ors();
                let q = (*right).distribute_ors();
                match split_and(p) {
                    Ok((a, b)) => Node::mk_and(Node::mk_or(a, q.clone()), Node::mk_or(b, q))
                        .distribute_ors(),
                    Err(p) => match split_and(q) {
                        Ok((a, b)) => {
                            Node::mk_and(Node::mk_or(p.clone(), a), Node::mk_or(p, b))
                                .distribute_ors()
                        }
                        Err(q) => Node {
                            kind: Binary(Or, Box::new(p), Box::new(q)),
                            origin,
                        },
                    },
                }
            }
            Binary(op, left, right) => Node {
                kind: Binary(
                    op,
                    Box::new((*left).distribute_ors()),
                    Box::new((*right).distribute_ors()),
                ),
                origin,
            },
            Unary(op, inner) => Node {
                kind: Unary(op, Box::new((*inner).distribute_ors())),
                origin,
            },
            Operand(name) => Node {
                kind: Operand(name),
                origin,
            },
        }
    }
}

/// **(internal)** Split a conjunction into its two operands, or give the node back.
fn split_and(node: Node) -> Result<(Node, Node), Node> {
    let Node { kind, origin } = node;
    match kind {
        Binary(And, a, b) => Ok((*a, *b)),
        kind => Err(Node { kind, origin }),
    }
}
