//! # Configuring the parser
//!
//! `parse_constraint` always uses the standard vocabulary. For anything else, create a
//! `ConstraintParser`. Each parser owns its `OperatorVocabulary`, so changing the keywords
//! of one parser never affects another:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let mut parser = ConstraintParser::new();
//! parser
//!     .vocabulary_mut()
//!     .set_binary_operators(&[
//!         ("y", BinaryOperator::And),
//!         ("o", BinaryOperator::Or),
//!         ("implica", BinaryOperator::Implies),
//!     ])
//!     .unwrap();
//!
//! let ast = parser.parse("A y B implica C").unwrap();
//! assert_eq!("(A AND B) IMPLIES C", ast.pretty_print());
//!
//! // `and` is an ordinary operand for this parser, but not for the default one.
//! assert!(parser.parse("A and B").is_err());
//! assert!(parse_constraint("A and B").is_ok());
//! ```
//!
//! Invalid keywords (empty, containing whitespace or parentheses, or denoting two different
//! operators) are rejected and the vocabulary stays unchanged:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let mut vocabulary = OperatorVocabulary::standard();
//! let result = vocabulary.set_unary_operators(&[("and", UnaryOperator::Not)]);
//! assert!(matches!(result, Err(ConstraintError::InvalidKeyword { .. })));
//! assert!(vocabulary.is_operator("not"));
//! ```
//!
//! Keyword matching is case-insensitive unless `set_case_sensitive(true)` is used.
//!
//! ## Limits
//!
//! Constraints usually come from model files, which may be large or malformed. A parser can
//! reject inputs with too many tokens or too deeply nested parentheses before doing any
//! other work:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let parser = ConstraintParser::new().with_max_tokens(100).with_max_depth(3);
//! assert!(parser.parse("((A or B) and C)").is_ok());
//! assert!(matches!(
//!     parser.parse("((((A))))"),
//!     Err(ConstraintError::ExpressionTooComplex { .. })
//! ));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `log` facade using the targets in `log_targets`. Install any
//! compatible logger to see them.
