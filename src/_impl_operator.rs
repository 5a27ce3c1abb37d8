use super::{BinaryOperator, Operator, UnaryOperator};
use std::fmt::{Display, Error, Formatter};

/// **(internal)** Priority index of the unary operator. It is larger than all binary
/// indices, so a unary operator becomes a parent only when no binary operator can.
const UNARY_PRIORITY: usize = 5;

impl UnaryOperator {
    /// Canonical (upper case) keyword of this operator.
    pub fn keyword(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
        }
    }

    /// Apply this operator to a boolean value.
    pub fn eval(&self, value: bool) -> bool {
        match self {
            UnaryOperator::Not => !value,
        }
    }
}

impl BinaryOperator {
    /// All binary operators, ordered by their priority index.
    pub const ALL: [BinaryOperator; 7] = [
        BinaryOperator::Equivalence,
        BinaryOperator::Implies,
        BinaryOperator::Requires,
        BinaryOperator::Excludes,
        BinaryOperator::Or,
        BinaryOperator::And,
        BinaryOperator::Xor,
    ];

    /// Canonical (upper case) keyword of this operator.
    pub fn keyword(&self) -> &'static str {
        match self {
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Implies => "IMPLIES",
            BinaryOperator::Requires => "REQUIRES",
            BinaryOperator::Excludes => "EXCLUDES",
            BinaryOperator::Equivalence => "EQUIVALENCE",
            BinaryOperator::Xor => "XOR",
        }
    }

    /// Index of this operator in the precedence table. Lower index binds looser, i.e. the
    /// operator with the lowest index in an expression becomes the root of its tree.
    pub fn priority(&self) -> usize {
        match self {
            BinaryOperator::Equivalence => 0,
            BinaryOperator::Implies | BinaryOperator::Requires | BinaryOperator::Excludes => 1,
            BinaryOperator::Or => 2,
            BinaryOperator::And => 3,
            BinaryOperator::Xor => 4,
        }
    }

    /// True for operators that are eliminated during CNF conversion.
    pub fn is_complex(&self) -> bool {
        !matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }

    /// Apply this operator to two boolean values.
    pub fn eval(&self, left: bool, right: bool) -> bool {
        match self {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
            BinaryOperator::Implies | BinaryOperator::Requires => !left || right,
            BinaryOperator::Excludes => !(left && right),
            BinaryOperator::Equivalence => left == right,
            BinaryOperator::Xor => left != right,
        }
    }
}

impl Operator {
    /// Canonical (upper case) keyword of this operator.
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Unary(op) => op.keyword(),
            Operator::Binary(op) => op.keyword(),
        }
    }

    /// Index in the precedence table; see `BinaryOperator::priority`.
    pub fn priority(&self) -> usize {
        match self {
            Operator::Unary(_) => UNARY_PRIORITY,
            Operator::Binary(op) => op.priority(),
        }
    }

    /// Number of operands this operator expects.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Unary(_) => 1,
            Operator::Binary(_) => 2,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Unary(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Operator::Binary(_))
    }
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Operator::Unary(op)
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Operator::Binary(op)
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.keyword())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.keyword())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryOperator, Operator, UnaryOperator};

    #[test]
    fn operator_priority_table() {
        let priorities: Vec<usize> = BinaryOperator::ALL.iter().map(|op| op.priority()).collect();
        assert_eq!(vec![0, 1, 1, 1, 2, 3, 4], priorities);
        let not = Operator::from(UnaryOperator::Not);
        for op in BinaryOperator::ALL.iter() {
            assert!(Operator::from(*op).priority() < not.priority());
        }
    }

    #[test]
    fn operator_truth_tables() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        let expected = [
            (BinaryOperator::And, [false, false, false, true]),
            (BinaryOperator::Or, [false, true, true, true]),
            (BinaryOperator::Implies, [true, true, false, true]),
            (BinaryOperator::Requires, [true, true, false, true]),
            (BinaryOperator::Excludes, [true, true, true, false]),
            (BinaryOperator::Equivalence, [true, false, false, true]),
            (BinaryOperator::Xor, [false, true, true, false]),
        ];
        for (op, table) in expected.iter() {
            for ((l, r), value) in cases.iter().zip(table.iter()) {
                assert_eq!(*value, op.eval(*l, *r), "{} {} {}", l, op, r);
            }
        }
        assert!(UnaryOperator::Not.eval(false));
    }

    #[test]
    fn operator_arity_and_complexity() {
        assert_eq!(1, Operator::Unary(UnaryOperator::Not).arity());
        assert_eq!(2, Operator::Binary(BinaryOperator::Or).arity());
        assert!(!BinaryOperator::And.is_complex());
        assert!(!BinaryOperator::Or.is_complex());
        assert!(BinaryOperator::Requires.is_complex());
        assert_eq!("EQUIVALENCE", format!("{}", BinaryOperator::Equivalence));
    }
}
