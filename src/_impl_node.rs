use super::*;
use fxhash::FxHashSet;
use std::fmt::{Display, Error, Formatter};
use std::hash::{Hash, Hasher};
use NodeKind::*;

/// Basic constructors and accessors.
impl Node {
    /// Create a leaf node for the operand `name`.
    pub fn mk_operand(name: &str) -> Node {
        Node::from(Operand(name.to_string()))
    }

    /// Create a `NOT` node over `inner`.
    pub fn mk_not(inner: Node) -> Node {
        Node::from(Unary(UnaryOperator::Not, Box::new(inner)))
    }

    /// Create a node applying the binary operator `op` to `left` and `right`.
    pub fn mk_binary(op: BinaryOperator, left: Node, right: Node) -> Node {
        Node::from(Binary(op, Box::new(left), Box::new(right)))
    }

    pub fn mk_and(left: Node, right: Node) -> Node {
        Node::mk_binary(BinaryOperator::And, left, right)
    }

    pub fn mk_or(left: Node, right: Node) -> Node {
        Node::mk_binary(BinaryOperator::Or, left, right)
    }

    /// **(internal)** Attach parse-time metadata to this node.
    pub(crate) fn with_origin(mut self, origin: NodeOrigin) -> Node {
        self.origin = Some(origin);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Parse-time metadata of this node, if it was created by the parser.
    pub fn origin(&self) -> Option<NodeOrigin> {
        self.origin
    }

    /// The operator of this node, or `None` for operand leaves.
    pub fn operator(&self) -> Option<Operator> {
        match &self.kind {
            Operand(_) => None,
            Unary(op, _) => Some(Operator::Unary(*op)),
            Binary(op, _, _) => Some(Operator::Binary(*op)),
        }
    }

    /// Name of the operand if this node is a leaf.
    pub fn operand(&self) -> Option<&str> {
        match &self.kind {
            Operand(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// The only child of a unary node, or the left child of a binary node.
    pub fn left(&self) -> Option<&Node> {
        match &self.kind {
            Operand(_) => None,
            Unary(_, inner) => Some(inner.as_ref()),
            Binary(_, left, _) => Some(left.as_ref()),
        }
    }

    /// The right child of a binary node.
    pub fn right(&self) -> Option<&Node> {
        match &self.kind {
            Binary(_, _, right) => Some(right.as_ref()),
            _ => None,
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self.kind, Operand(_))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self.kind, Unary(_, _))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.kind, Binary(_, _, _))
    }

    /// True if this node is a binary node with the given operator.
    pub fn is_binary_op(&self, op: BinaryOperator) -> bool {
        matches!(&self.kind, Binary(node_op, _, _) if *node_op == op)
    }
}

/// Queries over the whole subtree.
impl Node {
    /// Convert an operand or a negated operand into a `Literal`.
    pub fn to_literal(&self) -> Option<Literal> {
        match &self.kind {
            Operand(name) => Some(Literal::positive(name)),
            Unary(UnaryOperator::Not, inner) => inner.operand().map(Literal::negative),
            Binary(_, _, _) => None,
        }
    }

    /// Number of operand occurrences (i.e. leaves) in this subtree.
    pub fn count_operands(&self) -> usize {
        match &self.kind {
            Operand(_) => 1,
            Unary(_, inner) => inner.count_operands(),
            Binary(_, left, right) => left.count_operands() + right.count_operands(),
        }
    }

    /// Number of nodes on the longest path from this node to a leaf (a leaf has height 1).
    pub fn height(&self) -> usize {
        match &self.kind {
            Operand(_) => 1,
            Unary(_, inner) => inner.height() + 1,
            Binary(_, left, right) => left.height().max(right.height()) + 1,
        }
    }

    /// **(internal)** Collect all distinct operand names of this subtree.
    pub(crate) fn collect_operands<'a>(&'a self, operands: &mut FxHashSet<&'a str>) {
        match &self.kind {
            Operand(name) => {
                operands.insert(name.as_str());
            }
            Unary(_, inner) => inner.collect_operands(operands),
            Binary(_, left, right) => {
                left.collect_operands(operands);
                right.collect_operands(operands);
            }
        }
    }

    /// Evaluate this subtree, given the value of every operand.
    pub fn eval_in<F: Fn(&str) -> bool>(&self, valuation: &F) -> bool {
        match &self.kind {
            Operand(name) => valuation(name.as_str()),
            Unary(op, inner) => op.eval(inner.eval_in(valuation)),
            Binary(op, left, right) => op.eval(left.eval_in(valuation), right.eval_in(valuation)),
        }
    }

    /// True if the subtree is in negation normal form: only `AND`, `OR` and negated operands.
    pub fn is_nnf(&self) -> bool {
        match &self.kind {
            Operand(_) => true,
            Unary(_, inner) => inner.is_operand(),
            Binary(BinaryOperator::And, left, right) | Binary(BinaryOperator::Or, left, right) => {
                left.is_nnf() && right.is_nnf()
            }
            Binary(_, _, _) => false,
        }
    }

    /// True if the subtree is in conjunctive normal form: a tree of `AND`s over disjunctions
    /// of literals.
    pub fn is_cnf(&self) -> bool {
        match &self.kind {
            Binary(BinaryOperator::And, left, right) => left.is_cnf() && right.is_cnf(),
            _ => self.is_clause(),
        }
    }

    /// **(internal)** True if the subtree is a disjunction of literals.
    fn is_clause(&self) -> bool {
        match &self.kind {
            Binary(BinaryOperator::Or, left, right) => left.is_clause() && right.is_clause(),
            _ => self.to_literal().is_some(),
        }
    }
}

/// Rendering.
impl Node {
    /// Human-readable infix form. Binary subtrees are parenthesized when they appear as
    /// operands of another operator, everything else is left bare:
    /// `NOT (A OR B) IMPLIES C`.
    pub fn pretty_print(&self) -> String {
        match &self.kind {
            Operand(name) => name.clone(),
            Unary(op, inner) => format!("{} {}", op, inner.pretty_print_operand()),
            Binary(op, left, right) => format!(
                "{} {} {}",
                left.pretty_print_operand(),
                op,
                right.pretty_print_operand()
            ),
        }
    }

    /// **(internal)** Pretty print a node that is an operand of another operator.
    fn pretty_print_operand(&self) -> String {
        if self.is_binary() {
            format!("({})", self.pretty_print())
        } else {
            self.pretty_print()
        }
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        Node { kind, origin: None }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state)
    }
}

/// Compact structural form, e.g. `AND[A][NOT[B][]]`.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match &self.kind {
            Operand(name) => write!(f, "{}", name),
            Unary(op, inner) => write!(f, "{}[{}][]", op, inner),
            Binary(op, left, right) => write!(f, "{}[{}][{}]", op, left, right),
        }
    }
}
