/// **(internal)** The example constraints and their expected trees, errors and clauses.
mod _test_constraints_scenarios;

/// **(internal)** Generate pseudo-random constraint trees, convert them to CNF and
/// exhaustively verify that the clauses describe the same function.
mod _test_constraints_fuzzing;

/// **(internal)** Properties of preprocessing and parsing checked on generated inputs.
mod _test_constraints_properties;
