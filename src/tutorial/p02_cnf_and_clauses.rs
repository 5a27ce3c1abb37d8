//! # Normal forms and clauses
//!
//! SAT solvers expect formulas in *conjunctive normal form* (CNF): a conjunction of clauses,
//! where every clause is a disjunction of literals (operands or negated operands). An `Ast`
//! is converted to CNF in three steps, each available separately:
//!
//!  1. `eliminate_complex_operators` rewrites `IMPLIES`, `REQUIRES`, `EXCLUDES`,
//!     `EQUIVALENCE` and `XOR` using `NOT`, `AND` and `OR`.
//!  2. `move_nots_inwards` pushes negations down to the operands using De Morgan's laws
//!     and removes double negations. After the first two steps, the tree is in
//!     *negation normal form* (`to_nnf`).
//!  3. `distribute_ors` distributes disjunctions over conjunctions.
//!
//! ```rust
//! use logic_constraints::parse_constraint;
//!
//! let ast = parse_constraint("not (A implies B)").unwrap();
//!
//! let step_1 = ast.eliminate_complex_operators();
//! assert_eq!("NOT (NOT A OR B)", step_1.pretty_print());
//! let step_2 = step_1.move_nots_inwards();
//! assert_eq!("A AND NOT B", step_2.pretty_print());
//! assert!(step_2.is_nnf());
//!
//! assert_eq!(step_2, ast.to_nnf());
//! assert_eq!(step_2.distribute_ors(), ast.to_cnf());
//! ```
//!
//! Distribution can make the formula much larger: a disjunction of `n` conjunctions of two
//! operands has `2^n` clauses.
//!
//! ```rust
//! use logic_constraints::parse_constraint;
//!
//! let ast = parse_constraint("(A and B) or (C and D)").unwrap();
//! let cnf = ast.to_cnf();
//! assert!(cnf.is_cnf());
//! assert_eq!(
//!     "((A OR C) AND (A OR D)) AND ((B OR C) AND (B OR D))",
//!     cnf.pretty_print()
//! );
//! ```
//!
//! ## Clauses
//!
//! `get_clauses` converts the tree to CNF and lists its clauses. Negated operands are
//! prefixed with `-`. Nested conjunctions are flattened, so the result is always a flat list
//! of clauses:
//!
//! ```rust
//! use logic_constraints::*;
//!
//! let ast = parse_constraint("A equivalence B").unwrap();
//! assert_eq!(vec![vec!["A", "-B"], vec!["-A", "B"]], ast.get_clauses());
//!
//! let clauses = ast.cnf_clauses();
//! assert_eq!(Literal::negative("B"), clauses[0][1]);
//! assert!(clauses[0][1].is_negated());
//! ```
//!
//! The clauses are not simplified in any way: repeated literals or tautological clauses
//! (containing both `A` and `-A`) are kept as they are.
