use crate::_test_util::mk_random_ast;
use crate::expression_parser::preprocess;
use crate::{parse_constraint, ConstraintParser};
use proptest::prelude::*;

proptest! {
    #[test]
    fn preprocess_is_idempotent(text in "[A-Ca-c()& \t\n]{0,48}") {
        let once = preprocess(&text);
        prop_assert_eq!(once.clone(), preprocess(&once));
    }

    #[test]
    fn preprocess_is_idempotent_on_any_text(text in "\\PC{0,64}") {
        let once = preprocess(&text);
        prop_assert_eq!(once.clone(), preprocess(&once));
    }

    #[test]
    fn parsing_never_panics(text in "(A|B|not|and|or|implies|\\(|\\)| ){0,24}") {
        let parser = ConstraintParser::new();
        let _ = parser.parse(&text);
    }

    #[test]
    fn leaf_count_matches_operands(seed in any::<u64>(), height in 0u8..5) {
        let ast = mk_random_ast(height, 4, seed);
        let text = ast.pretty_print();
        let operands = ConstraintParser::new()
            .tokenize(&text)
            .iter()
            .filter(|t| t.is_operand())
            .count();
        let parsed = parse_constraint(&text).unwrap();
        prop_assert_eq!(operands, parsed.count_operands());
        prop_assert_eq!(ast.count_operands(), parsed.count_operands());
        prop_assert_eq!(ast, parsed);
    }
}
