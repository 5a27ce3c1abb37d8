//! Random trees are generated from a fixed set of seeds, so every run checks the same
//! formulas. Each tree is converted to CNF and the resulting clauses are compared with the
//! original tree in every valuation of its operands.
//!
//! The size of a CNF can grow exponentially with the height of the tree (especially with
//! nested `EQUIVALENCE` and `XOR`), so the trees are kept small.

use crate::_test_util::{assert_clauses_equivalent, assert_equivalent, mk_random_ast, FUZZ_SEEDS};

fn fuzz_test(num_operands: usize, height: u8, seed: u64) {
    let ast = mk_random_ast(height, num_operands, seed);

    let nnf = ast.to_nnf();
    assert!(nnf.is_nnf(), "Not in NNF: {}", nnf);
    assert_equivalent(&ast, &nnf);

    let cnf = ast.to_cnf();
    assert!(cnf.is_cnf(), "Not in CNF: {}", cnf);
    assert_equivalent(&ast, &cnf);

    assert_clauses_equivalent(&ast, &ast.cnf_clauses());
}

#[test]
fn fuzz_operands_2() {
    for height in 0..4 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(2, height, *seed);
        }
    }
}

#[test]
fn fuzz_operands_4() {
    for height in 0..4 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(4, height, *seed);
        }
    }
}

#[test]
fn fuzz_operands_6() {
    for seed in FUZZ_SEEDS.iter() {
        fuzz_test(6, 3, *seed);
    }
}

#[test]
fn fuzz_cnf_is_idempotent() {
    for height in 0..4 {
        for seed in FUZZ_SEEDS.iter() {
            let cnf = mk_random_ast(height, 4, *seed).to_cnf();
            let again = cnf.to_cnf();
            assert_equivalent(&cnf, &again);
            assert_eq!(cnf, again);
            assert_eq!(cnf.get_clauses(), again.get_clauses());
        }
    }
}

#[test]
fn fuzz_double_negation() {
    for seed in FUZZ_SEEDS.iter() {
        let ast = mk_random_ast(3, 4, *seed).to_nnf();
        let doubled = crate::Ast::mk_unary(
            crate::UnaryOperator::Not,
            crate::Ast::mk_unary(crate::UnaryOperator::Not, ast.clone()),
        );
        assert_eq!(ast, doubled.move_nots_inwards());
    }
}
