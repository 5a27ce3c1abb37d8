use super::Literal;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl Literal {
    /// Create a new literal for the operand `name`, negated if `negated` is true.
    pub fn new(name: &str, negated: bool) -> Literal {
        Literal {
            name: name.to_string(),
            negated,
        }
    }

    pub fn positive(name: &str) -> Literal {
        Literal::new(name, false)
    }

    pub fn negative(name: &str) -> Literal {
        Literal::new(name, true)
    }

    /// Name of the operand of this literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The same operand with opposite polarity.
    pub fn negate(&self) -> Literal {
        Literal::new(&self.name, !self.negated)
    }

    /// Evaluate this literal, given the value of every operand.
    pub fn eval_in<F: Fn(&str) -> bool>(&self, valuation: F) -> bool {
        valuation(self.name.as_str()) != self.negated
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.negated {
            write!(f, "-{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl TryFrom<&str> for Literal {
    type Error = String;

    /// Read a literal in the `name`/`-name` notation.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (name, negated) = match value.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (value, false),
        };
        if name.is_empty() || name.starts_with('-') {
            Err(format!("Invalid literal `{}`.", value))
        } else {
            Ok(Literal::new(name, negated))
        }
    }
}
