//! # Logic constraints
//!
//! This crate translates textual propositional constraints (as they appear in variability
//! models, e.g. cross-tree constraints of feature models) into a structured syntax tree and
//! further into *conjunctive normal form* (CNF), i.e. a list of clauses that can be handed
//! directly to a SAT solver.
//!
//! The translation proceeds in stages, each of which is also available on its own:
//!
//!  - Preprocessing and tokenization of the raw string (see `expression_parser`).
//!  - Syntax validation against a fixed set of rules (fail fast, one error at a time).
//!  - Precedence-based construction of the `Ast`.
//!  - The three CNF passes: elimination of complex operators (`implies`, `requires`,
//!    `excludes`, `equivalence`, `xor`), propagation of negations using De Morgan's laws,
//!    and distribution of disjunctions over conjunctions.
//!  - Extraction of clauses from the CNF tree.
//!
//! More detailed description of the syntax can be found in the [tutorial module](./tutorial/index.html).
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let ast = parse_constraint("A or (B and C)").unwrap();
//! assert_eq!("A OR (B AND C)", ast.pretty_print());
//!
//! let clauses = ast.get_clauses();
//! assert_eq!(vec![vec!["A", "B"], vec!["A", "C"]], clauses);
//!
//! let cnf = ast.to_cnf();
//! assert!(cnf.is_cnf());
//! ```
//!
//! Operator keywords are not hard-coded: every `ConstraintParser` owns an
//! `OperatorVocabulary` which can be reconfigured without affecting other parsers.
//!

pub mod expression_parser;
pub mod log_targets;
pub mod tutorial;

/// **(internal)** Error type of the crate.
mod constraint_error;

/// **(internal)** Implementation of the `Operator`, `UnaryOperator` and `BinaryOperator`.
mod _impl_operator;

/// **(internal)** Implementation of the `OperatorVocabulary`.
mod _impl_operator_vocabulary;

/// **(internal)** Implementation of the `Literal`.
mod _impl_literal;

/// **(internal)** Implementation of the `Node`.
mod _impl_node;

/// **(internal)** Implementation of the `Ast`, including CNF conversion and clause extraction.
mod _impl_ast;

/// **(internal)** Implementation of the `ConstraintParser`.
mod _impl_constraint_parser;

/// **(internal)** Scenario tests and randomized soundness checks.
#[cfg(test)]
mod _test_constraints;

/// Several basic utility methods for testing constraint trees.
#[cfg(test)]
mod _test_util;

pub use _impl_constraint_parser::parse_constraint;
pub use constraint_error::{ConstraintError, Misplacement};

use fxhash::FxHashMap;

/// **(internal)** Characters that cannot appear in an operator keyword or an operand name
/// (parentheses are detached from words during tokenization).
const NOT_IN_KEYWORD: [char; 2] = ['(', ')'];

/// The only unary operator of the constraint language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnaryOperator {
    Not,
}

/// Binary operators of the constraint language.
///
/// `Implies`, `Requires`, `Excludes`, `Equivalence` and `Xor` are "complex" operators, i.e.
/// syntactic sugar that disappears during CNF conversion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOperator {
    And,
    Or,
    Implies,
    Requires,
    Excludes,
    Equivalence,
    Xor,
}

/// Any operator that can appear in a constraint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

/// Parse-time metadata of a `Node`: the recursion `level` at which the tree builder created
/// it and the `position` of the token it was created from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeOrigin {
    pub level: usize,
    pub position: usize,
}

/// The shape of a `Node`. Children are owned directly, so a tree never shares subtrees.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Operand(String),
    Unary(UnaryOperator, Box<Node>),
    Binary(BinaryOperator, Box<Node>, Box<Node>),
}

/// A vertex of the constraint syntax tree.
///
/// Nodes created by the parser remember their `NodeOrigin`. Nodes created by rewriting
/// (e.g. during CNF conversion) or by hand have no origin. Equality of nodes is structural
/// and ignores the origin.
#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    origin: Option<NodeOrigin>,
}

/// Abstract syntax tree of one constraint. Owns exactly one root `Node`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ast {
    root: Node,
}

/// A possibly negated operand. Displayed as `name` or `-name`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    name: String,
    negated: bool,
}

/// The set of keywords recognized as operators.
///
/// The vocabulary is a plain value owned by a `ConstraintParser`, so different parsers can
/// use different keywords at the same time.
#[derive(Clone, Debug)]
pub struct OperatorVocabulary {
    unary: Vec<(String, UnaryOperator)>,
    binary: Vec<(String, BinaryOperator)>,
    case_sensitive: bool,
    lookup: FxHashMap<String, Operator>,
}

/// Turns constraint strings into `Ast`s using a specific `OperatorVocabulary`.
///
/// Optionally, the parser can reject inputs that are too large (`with_max_tokens`) or too
/// deeply nested (`with_max_depth`) before any recursive processing takes place.
#[derive(Clone, Debug, Default)]
pub struct ConstraintParser {
    vocabulary: OperatorVocabulary,
    max_tokens: Option<usize>,
    max_depth: Option<usize>,
}
