use crate::BinaryOperator::{And, Or};
use crate::NodeKind::Binary;
use crate::{Literal, Node};

impl Node {
    /// **(internal)** Append the clauses of this CNF subtree to `clauses`.
    ///
    /// Conjunctions are flattened completely, so every disjunction (or literal) below the
    /// top-level `AND` chain becomes exactly one clause.
    ///
    /// *Panics* if the subtree is not in CNF.
    pub(crate) fn collect_clauses(&self, clauses: &mut Vec<Vec<Literal>>) {
        match &self.kind {
            Binary(And, left, right) => {
                left.collect_clauses(clauses);
                right.collect_clauses(clauses);
            }
            _ => {
                let mut clause = Vec::new();
                self.collect_clause_literals(&mut clause);
                clauses.push(clause);
            }
        }
    }

    /// **(internal)** Append the literals of a disjunction to `clause`.
    fn collect_clause_literals(&self, clause: &mut Vec<Literal>) {
        match &self.kind {
            Binary(Or, left, right) => {
                left.collect_clause_literals(clause);
                right.collect_clause_literals(clause);
            }
            _ => match self.to_literal() {
                Some(literal) => clause.push(literal),
                None => unreachable!("Node `{}` is not a literal in a CNF clause.", self),
            },
        }
    }
}
