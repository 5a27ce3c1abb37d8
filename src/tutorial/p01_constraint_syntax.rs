//! # The constraint language
//!
//! A constraint is a propositional formula over *operands*: names of features (or any other
//! boolean variables) combined with operator keywords. Operands are arbitrary words that
//! contain no whitespace or parentheses and are not operator keywords. The standard
//! vocabulary consists of these operators, from the loosest binding to the tightest:
//!
//! | Operator | Keywords | Meaning |
//! |---|---|---|
//! | `EQUIVALENCE` | `equivalence`, `iff`, `<=>` | both sides have the same value |
//! | `IMPLIES` | `implies`, `=>` | if the left side holds, so does the right one |
//! | `REQUIRES` | `requires` | same as `IMPLIES` |
//! | `EXCLUDES` | `excludes` | the two sides cannot hold together |
//! | `OR` | `or`, `\|\|`, `\|` | at least one side holds |
//! | `AND` | `and`, `&&`, `&` | both sides hold |
//! | `XOR` | `xor`, `^` | exactly one side holds |
//! | `NOT` | `not` | negation (unary) |
//!
//! `IMPLIES`, `REQUIRES` and `EXCLUDES` share the same precedence. Keywords are matched
//! regardless of case. A chain of operators with the same precedence is grouped to the
//! right, i.e. `A implies B implies C` is read as `A implies (B implies C)`. Parentheses
//! can be used to override the precedence:
//!
//! ```rust
//! use logic_constraints::parse_constraint;
//!
//! let ast = parse_constraint("A or B and C").unwrap();
//! assert_eq!("A OR (B AND C)", ast.pretty_print());
//!
//! let ast = parse_constraint("(A or B) and C").unwrap();
//! assert_eq!("(A OR B) AND C", ast.pretty_print());
//!
//! let ast = parse_constraint("A implies B implies C").unwrap();
//! assert_eq!("A IMPLIES (B IMPLIES C)", ast.pretty_print());
//! ```
//!
//! Whitespace is insignificant, except that it separates words. Parentheses do not need to
//! be separated from the words they enclose.
//!
//! ## Trees
//!
//! The result of parsing is an `Ast` with a root `Node`. Every node is either an operand
//! leaf, a unary node with one child, or a binary node with two children. The `Display`
//! implementation shows the tree in a compact prefix form, `pretty_print` gives an infix
//! form that can be parsed again:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let ast = parse_constraint("not (A or B) implies C").unwrap();
//! assert_eq!("IMPLIES[NOT[OR[A][B]][]][C]", ast.to_string());
//! assert_eq!("NOT (A OR B) IMPLIES C", ast.pretty_print());
//!
//! let root = ast.root();
//! assert_eq!(Some(Operator::Binary(BinaryOperator::Implies)), root.operator());
//! assert_eq!(Some("C"), root.right().and_then(|n| n.operand()));
//! assert_eq!(vec!["A", "B", "C"], ast.operands());
//! ```
//!
//! Nodes created by the parser also remember where they came from (`Node::origin`): the
//! index of the token and the depth of the node in the tree. Nodes created by hand or by
//! the normal form conversions have no origin. The origin is ignored when comparing nodes.
//!
//! Trees can be also built directly:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let ast = Ast::mk_binary(
//!     BinaryOperator::Excludes,
//!     Ast::mk_operand("Basic"),
//!     Ast::mk_operand("Premium"),
//! );
//! assert_eq!(parse_constraint("Basic excludes Premium").unwrap(), ast);
//! assert!(!ast.eval_in(|_| true));
//! ```
//!
//! ## Syntax errors
//!
//! The parser stops at the first problem it finds and reports it as a `ConstraintError`:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! assert_eq!(Err(ConstraintError::EmptyExpression), parse_constraint("  "));
//! assert_eq!(
//!     Err(ConstraintError::EmptyParentheses { position: 2 }),
//!     parse_constraint("A and () or B")
//! );
//! match parse_constraint("A or not") {
//!     Err(ConstraintError::MisplacedOperator { reason, tokens, positions }) => {
//!         assert_eq!(Misplacement::TrailingUnary, reason);
//!         assert_eq!(vec!["not"], tokens);
//!         assert_eq!(vec![2], positions);
//!     }
//!     _ => panic!("Expected a misplaced operator."),
//! }
//! ```
