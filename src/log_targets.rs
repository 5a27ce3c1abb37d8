//! Targets to be used within a `log` macro.
//!
//! No logger implementation is provided by this crate; install any `log`-compatible logger to
//! see the messages.

/// Logs related to preprocessing, tokenization and tree construction.
pub const PARSER: &str = "parser";

/// Logs related to syntax validation.
pub const VALIDATION: &str = "validation";

/// Logs related to CNF/NNF conversion.
pub const NORMALIZATION: &str = "normalization";

/// Logs related to clause extraction.
pub const CLAUSES: &str = "clauses";
