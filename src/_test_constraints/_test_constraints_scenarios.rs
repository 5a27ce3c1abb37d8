use crate::_test_util::{assert_clauses_equivalent, mk_ast};
use crate::*;

#[test]
fn single_operand() {
    let ast = mk_ast("A");
    assert!(ast.root().is_operand());
    assert_eq!(Some("A"), ast.root().operand());
    assert_eq!(vec![vec!["A"]], ast.get_clauses());
}

#[test]
fn negated_operand() {
    let ast = mk_ast("not A");
    let root = ast.root();
    assert_eq!(Some(Operator::Unary(UnaryOperator::Not)), root.operator());
    assert_eq!(Some("A"), root.left().and_then(|n| n.operand()));
    assert_eq!(vec![vec!["-A"]], ast.get_clauses());
}

#[test]
fn implication() {
    assert_eq!(vec![vec!["-A", "B"]], mk_ast("A implies B").get_clauses());
    assert_eq!(vec![vec!["-A", "B"]], mk_ast("A requires B").get_clauses());
    assert_eq!(vec![vec!["-A", "B"]], mk_ast("A => B").get_clauses());
}

#[test]
fn conjunction() {
    assert_eq!(vec![vec!["A"], vec!["B"]], mk_ast("A and B").get_clauses());
}

#[test]
fn distribution() {
    let ast = mk_ast("A or (B and C)");
    assert_eq!(vec![vec!["A", "B"], vec!["A", "C"]], ast.get_clauses());
    assert!(ast.to_cnf().is_cnf());
}

#[test]
fn malformed_inputs() {
    assert!(matches!(
        parse_constraint("and A"),
        Err(ConstraintError::MisplacedOperator {
            reason: Misplacement::LeadingBinary,
            ..
        })
    ));
    assert_eq!(
        Err(ConstraintError::EmptyParentheses { position: 0 }),
        parse_constraint("()")
    );
    assert!(matches!(
        parse_constraint("A B"),
        Err(ConstraintError::AdjacentOperands { .. })
    ));
}

#[test]
fn error_messages() {
    let error = parse_constraint("A and or B").unwrap_err();
    assert_eq!(
        "two adjacent binary operators: [\"and\", \"or\"] at [1, 2]",
        error.to_string()
    );
    let error = parse_constraint("(A").unwrap_err();
    assert_eq!(
        "unbalanced parentheses: 1 opening and 0 closing",
        error.to_string()
    );
}

#[test]
fn double_negation() {
    let ast = mk_ast("not not (A or not B)");
    let result = ast.move_nots_inwards();
    assert_eq!(mk_ast("A or not B"), result);
    assert_eq!(vec![vec!["A", "-B"]], ast.get_clauses());
}

#[test]
fn feature_model_constraints() {
    // Typical cross-tree constraints of a feature model.
    let cases = vec![
        ("GPS requires Navigation", vec![vec!["-GPS", "Navigation"]]),
        ("Basic excludes Premium", vec![vec!["-Basic", "-Premium"]]),
        (
            "Camera and HighResolution implies (Storage or Cloud)",
            vec![vec!["-Camera", "-HighResolution", "Storage", "Cloud"]],
        ),
        (
            "Wifi equivalence not Offline",
            vec![vec!["Wifi", "Offline"], vec!["-Wifi", "-Offline"]],
        ),
    ];
    for (text, expected) in cases {
        let ast = mk_ast(text);
        assert_eq!(expected, ast.get_clauses(), "input: {:?}", text);
        assert_clauses_equivalent(&ast, &ast.cnf_clauses());
    }
}

#[test]
fn nested_negations_and_groups() {
    let ast = mk_ast("not (A and (B or not C)) or D");
    assert_eq!(
        "OR[NOT[AND[A][OR[B][NOT[C][]]]][]][D]",
        ast.to_string()
    );
    assert_eq!("NOT (A AND (B OR NOT C)) OR D", ast.pretty_print());
    assert_eq!(
        vec![vec!["-A", "-B", "D"], vec!["-A", "C", "D"]],
        ast.get_clauses()
    );
}

#[test]
fn pretty_print_round_trip() {
    let inputs = vec![
        "A",
        "not not A",
        "A or B and C",
        "(A or B) and C",
        "A implies B implies C",
        "(A implies B) implies C",
        "not (A xor B) equivalence (C excludes not D)",
    ];
    for input in inputs {
        let ast = mk_ast(input);
        let printed = ast.pretty_print();
        assert_eq!(ast, mk_ast(&printed), "printed: {:?}", printed);
    }
}
