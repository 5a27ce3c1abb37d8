use crate::log_targets;
use crate::{
    parse_constraint, Ast, BinaryOperator, ConstraintError, Literal, Node, UnaryOperator,
};
use fxhash::FxHashSet;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

/// **(internal)** Complex operator elimination, negation propagation and distribution.
mod _impl_cnf;

/// **(internal)** Extraction of clauses from a CNF tree.
mod _impl_clauses;

/// Basic constructors and accessors.
impl Ast {
    pub fn new(root: Node) -> Ast {
        Ast { root }
    }

    /// Create a tree consisting of a single operand.
    pub fn mk_operand(name: &str) -> Ast {
        Ast::new(Node::mk_operand(name))
    }

    /// Create a tree applying a unary operator to `inner`.
    pub fn mk_unary(op: UnaryOperator, inner: Ast) -> Ast {
        match op {
            UnaryOperator::Not => Ast::new(Node::mk_not(inner.root)),
        }
    }

    /// Create a tree applying a binary operator to `left` and `right`.
    pub fn mk_binary(op: BinaryOperator, left: Ast, right: Ast) -> Ast {
        Ast::new(Node::mk_binary(op, left.root, right.root))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }
}

/// Normal forms.
impl Ast {
    /// Replace `IMPLIES`, `REQUIRES`, `EXCLUDES`, `EQUIVALENCE` and `XOR` with equivalent
    /// formulas over `NOT`, `AND` and `OR`.
    pub fn eliminate_complex_operators(&self) -> Ast {
        Ast::new(self.root.clone().eliminate_complex_operators())
    }

    /// Propagate negations towards the operands (De Morgan) and remove double negations.
    pub fn move_nots_inwards(&self) -> Ast {
        Ast::new(self.root.clone().move_nots_inwards())
    }

    /// Distribute `OR` over `AND`.
    pub fn distribute_ors(&self) -> Ast {
        Ast::new(self.root.clone().distribute_ors())
    }

    /// Convert this tree into negation normal form: only `AND`, `OR` and negated operands
    /// remain.
    pub fn to_nnf(&self) -> Ast {
        let nnf = self
            .root
            .clone()
            .eliminate_complex_operators()
            .move_nots_inwards();
        if cfg!(feature = "shields_up") && !nnf.is_nnf() {
            panic!("Result `{}` is not in negation normal form.", nnf);
        }
        Ast::new(nnf)
    }

    /// Convert this tree into an equivalent tree in conjunctive normal form.
    ///
    /// The size of the result can be exponential in the size of the input (every
    /// distribution step copies one of the operands).
    pub fn to_cnf(&self) -> Ast {
        let cnf = self
            .root
            .clone()
            .eliminate_complex_operators()
            .move_nots_inwards()
            .distribute_ors();
        if cfg!(feature = "shields_up") && !cnf.is_cnf() {
            panic!("Result `{}` is not in conjunctive normal form.", cnf);
        }
        log::debug!(
            target: log_targets::NORMALIZATION,
            "CNF of {} operand(s) has {} operand(s).",
            self.root.count_operands(),
            cnf.count_operands()
        );
        Ast::new(cnf)
    }

    pub fn is_nnf(&self) -> bool {
        self.root.is_nnf()
    }

    pub fn is_cnf(&self) -> bool {
        self.root.is_cnf()
    }
}

/// Clauses.
impl Ast {
    /// Convert this tree to CNF and return its clauses as lists of literals.
    pub fn cnf_clauses(&self) -> Vec<Vec<Literal>> {
        let cnf = if self.is_cnf() {
            self.clone()
        } else {
            self.to_cnf()
        };
        let mut clauses = Vec::new();
        cnf.root.collect_clauses(&mut clauses);
        log::debug!(
            target: log_targets::CLAUSES,
            "Extracted {} clause(s).",
            clauses.len()
        );
        clauses
    }

    /// Convert this tree to CNF and return its clauses. Each literal is written as `name`
    /// or `-name` for a negated operand:
    ///
    /// ```rust
    /// use logic_constraints::parse_constraint;
    ///
    /// let ast = parse_constraint("A implies B").unwrap();
    /// assert_eq!(vec![vec!["-A", "B"]], ast.get_clauses());
    /// ```
    pub fn get_clauses(&self) -> Vec<Vec<String>> {
        self.cnf_clauses()
            .into_iter()
            .map(|clause| clause.iter().map(|l| l.to_string()).collect())
            .collect()
    }
}

/// Other queries.
impl Ast {
    /// Distinct operand names of this tree, sorted.
    pub fn operands(&self) -> Vec<String> {
        let mut operands = FxHashSet::default();
        self.root.collect_operands(&mut operands);
        let mut result: Vec<String> = operands.into_iter().map(|o| o.to_string()).collect();
        result.sort();
        result
    }

    /// Number of operand occurrences (leaves) of this tree.
    pub fn count_operands(&self) -> usize {
        self.root.count_operands()
    }

    /// Evaluate this tree, given the value of every operand.
    pub fn eval_in<F: Fn(&str) -> bool>(&self, valuation: F) -> bool {
        self.root.eval_in(&valuation)
    }

    /// Human-readable infix form with upper case keywords, e.g. `NOT (A OR B) IMPLIES C`.
    /// The output can be parsed again using the standard vocabulary.
    pub fn pretty_print(&self) -> String {
        self.root.pretty_print()
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.root)
    }
}

impl From<Node> for Ast {
    fn from(root: Node) -> Self {
        Ast::new(root)
    }
}

impl TryFrom<&str> for Ast {
    type Error = ConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_constraint(value)
    }
}

impl FromStr for Ast {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_constraint(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::convert::TryFrom;

    #[test]
    fn ast_constructors() {
        let ast = Ast::mk_binary(
            BinaryOperator::Requires,
            Ast::mk_operand("A"),
            Ast::mk_unary(UnaryOperator::Not, Ast::mk_operand("B")),
        );
        assert_eq!("REQUIRES[A][NOT[B][]]", ast.to_string());
        assert_eq!("A REQUIRES NOT B", ast.pretty_print());
        assert_eq!(Ast::try_from("a requires not B").unwrap().count_operands(), 2);
        assert_eq!(ast, Ast::try_from("A requires not B").unwrap());
        assert_eq!(ast, "A REQUIRES NOT B".parse::<Ast>().unwrap());
    }

    #[test]
    fn ast_parse_errors() {
        assert_eq!(
            Err(ConstraintError::EmptyExpression),
            "".parse::<Ast>()
        );
        assert!(Ast::try_from("A and").is_err());
    }

    #[test]
    fn ast_operands() {
        let ast = parse_constraint("(C or A) and not (A implies B)").unwrap();
        assert_eq!(vec!["A", "B", "C"], ast.operands());
        assert_eq!(4, ast.count_operands());
    }

    #[test]
    fn ast_normal_forms() {
        let ast = parse_constraint("not (A equivalence B)").unwrap();
        assert!(!ast.is_nnf());
        let nnf = ast.to_nnf();
        assert!(nnf.is_nnf());
        assert!(!nnf.is_cnf());
        let cnf = ast.to_cnf();
        assert!(cnf.is_cnf());
        // The individual passes compose into `to_cnf`.
        let staged = ast
            .eliminate_complex_operators()
            .move_nots_inwards()
            .distribute_ors();
        assert_eq!(cnf, staged);
    }

    #[test]
    fn ast_clauses() {
        let ast = parse_constraint("A excludes B").unwrap();
        assert_eq!(vec![vec!["-A", "-B"]], ast.get_clauses());
        assert_eq!(
            vec![vec![Literal::negative("A"), Literal::negative("B")]],
            ast.cnf_clauses()
        );
        let ast = parse_constraint("A equivalence B").unwrap();
        assert_eq!(vec![vec!["A", "-B"], vec!["-A", "B"]], ast.get_clauses());
        let ast = parse_constraint("A xor B").unwrap();
        assert_eq!(vec![vec!["A", "B"], vec!["-A", "-B"]], ast.get_clauses());
    }

    #[test]
    fn ast_eval() {
        let ast = parse_constraint("A implies (B or C)").unwrap();
        assert!(ast.eval_in(|_| false));
        assert!(!ast.eval_in(|name| name == "A"));
        assert!(ast.eval_in(|name| name != "B"));
    }
}
