use super::*;
use fxhash::FxHashSet;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

/// Operand names used by randomly generated trees.
pub const OPERAND_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Seeds for all randomized tests, so that failures are reproducible.
pub const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

/// Parse a constraint using the standard vocabulary. Panics on syntax errors.
pub fn mk_ast(text: &str) -> Ast {
    parse_constraint(text).unwrap()
}

/// Create a pseudo-random tree with at most `height` operator levels over the first
/// `num_operands` names of `OPERAND_NAMES`. Every operator (including `NOT`) can appear.
pub fn mk_random_ast(height: u8, num_operands: usize, seed: u64) -> Ast {
    let mut rand = StdRng::seed_from_u64(seed);
    Ast::new(mk_random_node(&mut rand, height, num_operands))
}

fn mk_random_node(rand: &mut StdRng, height: u8, num_operands: usize) -> Node {
    // Occasionally stop early so that the trees are not complete.
    if height == 0 || rand.next_u32() % 6 == 0 {
        let name = OPERAND_NAMES[rand.next_u32() as usize % num_operands];
        return Node::mk_operand(name);
    }
    let choice = rand.next_u32() as usize % (BinaryOperator::ALL.len() + 1);
    if choice == 0 {
        Node::mk_not(mk_random_node(rand, height - 1, num_operands))
    } else {
        let left = mk_random_node(rand, height - 1, num_operands);
        let right = mk_random_node(rand, height - 1, num_operands);
        Node::mk_binary(BinaryOperator::ALL[choice - 1], left, right)
    }
}

/// All valuations of the given operands. Each valuation is the set of operands that are true.
pub fn all_valuations(names: &[String]) -> Vec<FxHashSet<String>> {
    (0..(1usize << names.len()))
        .map(|mask| {
            names
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, name)| name.clone())
                .collect()
        })
        .collect()
}

/// Evaluate a conjunction of clauses in the given valuation.
pub fn eval_clauses(clauses: &[Vec<Literal>], valuation: &FxHashSet<String>) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|literal| literal.eval_in(|name| valuation.contains(name)))
    })
}

/// Exhaustively check that `clauses` have the same value as `ast` in every valuation of the
/// operands of `ast`.
pub fn assert_clauses_equivalent(ast: &Ast, clauses: &[Vec<Literal>]) {
    for valuation in all_valuations(&ast.operands()) {
        assert_eq!(
            ast.eval_in(|name| valuation.contains(name)),
            eval_clauses(clauses, &valuation),
            "Clauses of `{}` differ in valuation {:?}.",
            ast.pretty_print(),
            valuation
        );
    }
}

/// Exhaustively check that two trees have the same value in every valuation of their operands.
pub fn assert_equivalent(left: &Ast, right: &Ast) {
    let mut names = left.operands();
    names.extend(right.operands());
    names.sort();
    names.dedup();
    for valuation in all_valuations(&names) {
        assert_eq!(
            left.eval_in(|name| valuation.contains(name)),
            right.eval_in(|name| valuation.contains(name)),
            "`{}` and `{}` differ in valuation {:?}.",
            left.pretty_print(),
            right.pretty_print(),
            valuation
        );
    }
}
