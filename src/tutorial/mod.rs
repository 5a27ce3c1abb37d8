//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [The constraint language](./p01_constraint_syntax/index.html)
//!  - [Normal forms and clauses](./p02_cnf_and_clauses/index.html)
//!  - [Configuring the parser](./p03_parser_configuration/index.html)
//!

pub mod p01_constraint_syntax;
pub mod p02_cnf_and_clauses;
pub mod p03_parser_configuration;
